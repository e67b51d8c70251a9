use crate::model::DetailItem;

fn item(
    id: &str,
    title: &str,
    year: i32,
    logo_text: &str,
    summary: &str,
    image_label: &str,
) -> DetailItem {
    DetailItem {
        id: id.to_string(),
        title: title.to_string(),
        year,
        logo_text: logo_text.to_string(),
        summary: summary.to_string(),
        image_label: image_label.to_string(),
    }
}

pub fn projects() -> Vec<DetailItem> {
    vec![
        item(
            "veil-echo",
            "Veil Echo",
            2024,
            "VE",
            "A kinetic portfolio builder exploring layered motion and silhouette.",
            "Kinetic interface study.",
        ),
        item(
            "gloss-lattice",
            "Gloss Lattice",
            2023,
            "GL",
            "Material-driven UI system with modular grids and bright edges.",
            "Material layout mockups.",
        ),
        item(
            "night-index",
            "Night Index",
            2022,
            "NI",
            "A cataloging tool for nocturne references and ambient cues.",
            "Indexing UI with layered cards.",
        ),
    ]
}

pub fn research() -> Vec<DetailItem> {
    vec![
        item(
            "signal-drift",
            "Signal Drift",
            2024,
            "SD",
            "Research on perceptual thresholds for motion and contrast.",
            "Experiment dashboard.",
        ),
        item(
            "soft-edges",
            "Soft Edges",
            2023,
            "SE",
            "Study of soft UI boundaries and memory in spatial layouts.",
            "Spatial prototypes.",
        ),
        item(
            "quiet-grid",
            "Quiet Grid",
            2021,
            "QG",
            "Exploration of attention in low-contrast environments.",
            "Eye-tracking outputs.",
        ),
    ]
}

pub fn blog() -> Vec<DetailItem> {
    vec![
        item(
            "midnight-annotations",
            "Midnight Annotations",
            2024,
            "MA",
            "Notes on nocturnal interfaces and the calm of low contrast.",
            "Annotated reading stack.",
        ),
        item(
            "archival-shadows",
            "Archival Shadows",
            2023,
            "AS",
            "A reflection on collecting fragments without flattening them.",
            "Archive spreads and scans.",
        ),
        item(
            "soft-signal",
            "Soft Signal",
            2022,
            "SS",
            "Sketches on quiet feedback loops and subtle indicators.",
            "Signal sketches and notes.",
        ),
    ]
}
