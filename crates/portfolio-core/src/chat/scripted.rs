//! Scripted responder - canned persona-aware replies
//!
//! Stands in for the completion backend: picks a reply by keyword per
//! persona, with a persona-specific fallback. Replies are deterministic,
//! so the widget behaves the same in every session.

use super::session::{ChatRequest, ChatResponder, ChatResponse, ResponseStatus};
use crate::error::PortfolioResult;
use crate::persona::Persona;

/// A canned reply matched on any of its keywords.
struct Script {
    keywords: &'static [&'static str],
    reply: &'static str,
}

static AI_SCRIPTS: &[Script] = &[
    Script {
        keywords: &["experience", "background", "career"],
        reply: "The portfolio covers senior AI engineering work: enterprise-scale cloud \
                infrastructure, **machine learning systems**, and data-driven platforms, \
                with a focus on architectures that hold up in production.",
    },
    Script {
        keywords: &["llm", "generative", "gpt", "language model"],
        reply: "**Generative AI** is a core area: large language models, retrieval-augmented \
                generation, and fine-tuning workflows built around Transformers and modern \
                serving stacks.",
    },
    Script {
        keywords: &["cloud", "mlops", "infrastructure", "deploy"],
        reply: "On the **MLOps** side: cloud-native training and serving pipelines, \
                experiment tracking, and infrastructure-as-code across the major cloud \
                platforms.",
    },
    Script {
        keywords: &["project"],
        reply: "Check the **🧠 AI Projects** section for the highlights, from ML pipelines \
                to LLM-powered applications. Ask about any of them for more detail!",
    },
];

static CYBER_SCRIPTS: &[Script] = &[
    Script {
        keywords: &["experience", "background", "career"],
        reply: "The security track covers **penetration testing**, vulnerability assessment, \
                and digital forensics work across enterprise environments.",
    },
    Script {
        keywords: &["pentest", "penetration", "red team"],
        reply: "**Penetration testing** engagements follow structured methodology: \
                reconnaissance, exploitation, post-exploitation, and reporting, always under \
                explicit authorization.",
    },
    Script {
        keywords: &["forensic", "incident", "response"],
        reply: "**Digital forensics & incident response**: evidence acquisition, timeline \
                reconstruction, and containment playbooks for enterprise incidents.",
    },
    Script {
        keywords: &["project"],
        reply: "The **🛡️ Security Projects** section collects the public work: tooling, \
                research, and hardening guides. Ask about any of them!",
    },
];

const AI_FALLBACK: &str =
    "Happy to help! I can talk about **machine learning**, **generative AI**, **cloud \
     architecture**, and the AI projects in this portfolio. What would you like to know?";

const CYBER_FALLBACK: &str =
    "Happy to help! I can talk about **penetration testing**, **digital forensics**, \
     **threat intelligence**, and the security projects in this portfolio. What would you \
     like to know?";

/// Deterministic canned responder implementing the chat contract.
#[derive(Default)]
pub struct ScriptedResponder;

impl ScriptedResponder {
    pub fn new() -> Self {
        Self
    }

    fn pick(persona: Persona, message: &str) -> &'static str {
        let needle = message.to_lowercase();
        let (scripts, fallback) = match persona {
            Persona::Ai => (AI_SCRIPTS, AI_FALLBACK),
            Persona::Cyber => (CYBER_SCRIPTS, CYBER_FALLBACK),
        };

        scripts
            .iter()
            .find(|s| s.keywords.iter().any(|k| needle.contains(k)))
            .map(|s| s.reply)
            .unwrap_or(fallback)
    }
}

impl ChatResponder for ScriptedResponder {
    fn respond(&self, request: &ChatRequest) -> PortfolioResult<ChatResponse> {
        Ok(ChatResponse {
            status: ResponseStatus::Success,
            message: Self::pick(request.persona, &request.message).to_string(),
        })
    }
}
