//! Experience timeline - static entries with per-entry collapse state

use std::collections::HashSet;

/// One position in the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Stable id, used for navigation anchors and expand state
    pub id: &'static str,
    pub organization: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub achievements: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

/// The experience entries, newest first.
pub static TIMELINE_ENTRIES: &[TimelineEntry] = &[
    TimelineEntry {
        id: "cloudforge",
        organization: "CloudForge Systems",
        role: "Senior AI Engineer",
        period: "2023 — Present",
        summary: "Leading the ML platform team: enterprise RAG services, model serving \
                  infrastructure, and evaluation tooling for production LLM workloads.",
        achievements: &[
            "Shipped a retrieval-augmented generation platform serving three business units",
            "Cut model serving cost 40% by moving inference to autoscaled GPU pools",
            "Built the internal evaluation harness used for every model rollout",
        ],
        tech_stack: &["Python", "PyTorch", "Kubernetes", "Azure", "LangChain"],
    },
    TimelineEntry {
        id: "meridian",
        organization: "Meridian Analytics",
        role: "Machine Learning Engineer",
        period: "2021 — 2023",
        summary: "End-to-end ML delivery: feature pipelines, model training, and monitoring \
                  for forecasting and recommendation products.",
        achievements: &[
            "Productionized demand forecasting across 200+ retail locations",
            "Introduced drift monitoring that caught two silent model regressions",
        ],
        tech_stack: &["Python", "Spark", "TensorFlow", "Airflow", "AWS"],
    },
    TimelineEntry {
        id: "sentinel",
        organization: "Sentinel Security Group",
        role: "Security Analyst / Penetration Tester",
        period: "2019 — 2021",
        summary: "Offensive security engagements and incident response for enterprise \
                  clients: web application testing, network assessments, and forensics.",
        achievements: &[
            "Led 30+ authorized penetration tests across finance and healthcare clients",
            "Built the internal OSINT tooling used in engagement reconnaissance",
        ],
        tech_stack: &["Burp Suite", "Metasploit", "Wireshark", "Python", "Volatility"],
    },
];

/// Expand/collapse state of the timeline.
///
/// Every entry starts collapsed; expanding one entry leaves the others
/// untouched.
#[derive(Debug, Default, Clone)]
pub struct TimelineState {
    expanded: HashSet<&'static str>,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an entry. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: &'static str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
