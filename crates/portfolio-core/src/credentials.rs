//! Credential cards - static study/certification records and modal state

/// Kind of credential card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Study,
    Certification,
}

/// One credential shown as a card and expandable into a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    /// Stable id, used for modal state
    pub id: &'static str,
    pub kind: CredentialKind,
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    /// Duration (studies) or issue date (certifications)
    pub period: &'static str,
    /// Grade (studies) or validity (certifications)
    pub standing: &'static str,
    pub image: &'static str,
    pub skills: &'static [&'static str],
}

/// Academic credentials.
pub static STUDIES: &[Credential] = &[
    Credential {
        id: "bachelors-computer-science",
        kind: CredentialKind::Study,
        title: "Bachelor's Degree in Computer Science",
        issuer: "Trinity College",
        description: "Bachelor's degree in Computer Science with specialization in \
                      programming, algorithms, and fundamentals of computer science.",
        period: "4 years",
        standing: "Cum Laude",
        image: "assets/credentials/bachelors-cs.png",
        skills: &[
            "Programming Fundamentals",
            "Data Structures",
            "Algorithms",
            "Software Engineering",
            "Database Management",
            "Computer Networks",
        ],
    },
    Credential {
        id: "master-big-data",
        kind: CredentialKind::Study,
        title: "Master's in Big Data & Data Science",
        issuer: "Mioti Tech School",
        description: "Specialized master's in big data analysis, machine learning, and \
                      data science applied to business environments.",
        period: "12 months",
        standing: "Excellent",
        image: "assets/credentials/master-big-data.png",
        skills: &[
            "Apache Spark",
            "Hadoop",
            "Python",
            "SQL",
            "Machine Learning",
            "Business Intelligence",
        ],
    },
    Credential {
        id: "master-deep-learning",
        kind: CredentialKind::Study,
        title: "Master's in Deep Learning & Generative AI",
        issuer: "Mioti Tech School",
        description: "Advanced master's in deep neural networks, generative artificial \
                      intelligence, and large language models.",
        period: "12 months",
        standing: "Summa Cum Laude",
        image: "assets/credentials/master-deep-learning.png",
        skills: &[
            "PyTorch",
            "TensorFlow",
            "Transformers",
            "GANs",
            "LLMs",
            "Computer Vision",
            "NLP",
        ],
    },
];

/// Professional certifications.
pub static CERTIFICATIONS: &[Credential] = &[Credential {
    id: "azure-ai-engineer",
    kind: CredentialKind::Certification,
    title: "Microsoft Certified: Azure AI Engineer Associate",
    issuer: "Microsoft",
    description: "Validation of competencies in artificial intelligence and machine \
                  learning on the Azure platform, including cognitive services, computer \
                  vision, and natural language processing.",
    period: "March 2024",
    standing: "No expiry",
    image: "assets/credentials/azure-ai-engineer.png",
    skills: &[
        "Azure Cognitive Services",
        "Computer Vision",
        "Natural Language Processing",
        "Machine Learning",
        "Azure Bot Service",
    ],
}];

/// Find a credential by id across both sets.
pub fn find_credential(id: &str) -> Option<&'static Credential> {
    STUDIES
        .iter()
        .chain(CERTIFICATIONS.iter())
        .find(|c| c.id == id)
}

/// Modal state: at most one credential open at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CredentialModal {
    open: Option<&'static str>,
}

impl CredentialModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a credential by id; replaces any already-open modal.
    /// Unknown ids are ignored.
    pub fn open(&mut self, id: &str) {
        match find_credential(id) {
            Some(credential) => self.open = Some(credential.id),
            None => tracing::debug!(id, "ignoring open for unknown credential"),
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// The currently open credential, if any.
    pub fn current(&self) -> Option<&'static Credential> {
        self.open.and_then(find_credential)
    }
}
