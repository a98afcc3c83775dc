use crate::model::item::Item;

/// The compiled-in demo tree.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::folder(
            "1",
            "Projects",
            "2025-01-15",
            vec![
                Item::folder(
                    "1-1",
                    "Website Redesign",
                    "2025-01-14",
                    vec![
                        Item::file(
                            "1-1-1",
                            "design-mockup.figma",
                            "2025-01-14",
                            "https://figma.com/design-mockup",
                            "2.4 MB",
                        ),
                        Item::file(
                            "1-1-2",
                            "requirements.pdf",
                            "2025-01-12",
                            "https://example.com/requirements.pdf",
                            "1.2 MB",
                        ),
                    ],
                ),
                Item::folder(
                    "1-2",
                    "Mobile App",
                    "2025-01-10",
                    vec![Item::file(
                        "1-2-1",
                        "app-prototype.xd",
                        "2025-01-10",
                        "https://example.com/app-prototype.xd",
                        "3.1 MB",
                    )],
                ),
            ],
        ),
        Item::folder(
            "2",
            "Documents",
            "2025-01-16",
            vec![
                Item::file(
                    "2-1",
                    "Q1 Report.docx",
                    "2025-01-16",
                    "https://example.com/q1-report.docx",
                    "850 KB",
                ),
                Item::file(
                    "2-2",
                    "Meeting Notes.txt",
                    "2025-01-15",
                    "https://example.com/meeting-notes.txt",
                    "45 KB",
                ),
            ],
        ),
        Item::file(
            "3",
            "presentation.pptx",
            "2025-01-13",
            "https://example.com/presentation.pptx",
            "5.2 MB",
        ),
    ]
}
