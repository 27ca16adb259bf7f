//! Property-based tests for persona and transcript invariants

use proptest::prelude::*;

use portfolio_core::{
    profile, ChatMessage, ChatRole, ChatTranscript, Persona, MAX_MESSAGES,
};

fn persona_strategy() -> impl Strategy<Value = Persona> {
    prop_oneof![Just(Persona::Ai), Just(Persona::Cyber)]
}

proptest! {
    /// String form round-trips for every persona.
    #[test]
    fn persona_string_roundtrip(persona in persona_strategy()) {
        prop_assert_eq!(Persona::parse(persona.as_str()).unwrap(), persona);
    }

    /// Toggling an even number of times is the identity, odd flips.
    #[test]
    fn toggle_parity(persona in persona_strategy(), times in 0usize..32) {
        let mut current = persona;
        for _ in 0..times {
            current = current.toggled();
        }
        if times % 2 == 0 {
            prop_assert_eq!(current, persona);
        } else {
            prop_assert_eq!(current, persona.toggled());
        }
    }

    /// No input string other than the two literals parses.
    #[test]
    fn parse_rejects_noise(s in "[a-zA-Z0-9 ]{0,12}") {
        let parsed = Persona::parse(&s);
        if s == "ai" || s == "cyber" {
            prop_assert!(parsed.is_ok());
        } else {
            prop_assert!(parsed.is_err());
        }
    }

    /// Profile lookup is total and self-consistent.
    #[test]
    fn profile_matches_persona(persona in persona_strategy()) {
        prop_assert_eq!(profile(persona).persona, persona);
    }

    /// The transcript never exceeds its cap and always keeps the newest
    /// messages, whatever the insertion count.
    #[test]
    fn transcript_cap_holds(count in 0usize..200) {
        let mut transcript = ChatTranscript::new();
        for i in 0..count {
            transcript.push(ChatMessage::new(ChatRole::User, format!("msg {i}")));
        }

        prop_assert!(transcript.len() <= MAX_MESSAGES);
        if count > 0 {
            let last = transcript.last().unwrap();
            prop_assert_eq!(last.content.clone(), format!("msg {}", count - 1));
        }
        if count > MAX_MESSAGES {
            prop_assert_eq!(transcript.len(), MAX_MESSAGES);
        }
    }
}
