//! Static directory of the integrated and referenced tools.
//!
//! Three tools are API-backed; the other three have no automatable
//! integration and get a descriptive block plus an outbound link only.

/// Fixed metadata for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    pub summary: &'static str,
    pub automation: &'static str,
    pub url: &'static str,
    /// True when a provider client backs this tool.
    pub has_api: bool,
}

pub const TOOL_DIRECTORY: &[ToolInfo] = &[
    ToolInfo {
        name: "gProfiler",
        summary: "GO, KEGG, HPO enrichment with orthology support.",
        automation: "Full API supported",
        url: "https://biit.cs.ut.ee/gprofiler/gost",
        has_api: true,
    },
    ToolInfo {
        name: "Enrichr",
        summary: "Large curated libraries for TFs, drugs, pathways.",
        automation: "Full API supported",
        url: "https://maayanlab.cloud/Enrichr/",
        has_api: true,
    },
    ToolInfo {
        name: "WebGestalt",
        summary: "Map gene symbols to Entrez IDs and explore supported annotations.",
        automation: "ID mapping only; enrichment via web UI",
        url: "https://www.webgestalt.org/",
        has_api: true,
    },
    ToolInfo {
        name: "Metascape",
        summary: "Web-based network enrichment with integrated visualization.",
        automation: "Web-only",
        url: "https://metascape.org/",
        has_api: false,
    },
    ToolInfo {
        name: "DAVID",
        summary: "Classical GO/KEGG mapping with batch annotation.",
        automation: "Currently not functioning",
        url: "https://david.ncifcrf.gov/",
        has_api: false,
    },
    ToolInfo {
        name: "ClusterProfiler",
        summary: "Programmatic enrichment in R for GO/KEGG with strong visualization.",
        automation: "Via R package",
        url: "https://bioconductor.org/packages/clusterProfiler/",
        has_api: false,
    },
];

/// Look up a tool by name.
pub fn info(name: &str) -> Option<&'static ToolInfo> {
    TOOL_DIRECTORY.iter().find(|t| t.name == name)
}
