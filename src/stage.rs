//! Pipeline stage vocabulary and the follow-up transition table.
//!
//! Stage values in the record store are literal strings carrying
//! presentational glyphs (e.g. "📬 Touchpoint 1"). The store token is the
//! wire format; everything else in the crate operates on the `Stage`
//! variant. Parsing is exact string equality — no normalization, no
//! fuzzy matching. Unknown tokens parse to `None` and are excluded from
//! every classification bucket rather than raising.

use crate::error::PipelineError;

/// Closed set of pipeline stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    New,
    PendingApproval,
    Approved,
    Rejected,
    Building,
    BuildFailed,
    PrototypeBuilt,
    SendLoom,
    Deployed,
    InitialMessageSent,
    Touchpoint1,
    Touchpoint2,
    Touchpoint3,
    LightEngagement,
    EngagementWithPrototype,
    ClosedWon,
    ClosedLost,
}

/// All stages, in pipeline order. Useful for building filter formulas
/// that enumerate the vocabulary.
pub const ALL_STAGES: [Stage; 17] = [
    Stage::New,
    Stage::PendingApproval,
    Stage::Approved,
    Stage::Rejected,
    Stage::Building,
    Stage::BuildFailed,
    Stage::PrototypeBuilt,
    Stage::SendLoom,
    Stage::Deployed,
    Stage::InitialMessageSent,
    Stage::Touchpoint1,
    Stage::Touchpoint2,
    Stage::Touchpoint3,
    Stage::LightEngagement,
    Stage::EngagementWithPrototype,
    Stage::ClosedWon,
    Stage::ClosedLost,
];

impl Stage {
    /// The exact glyph-bearing token stored in the record store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "🆕 New",
            Stage::PendingApproval => "⏳ Pending Approval",
            Stage::Approved => "✅ Approved",
            Stage::Rejected => "❌ Rejected",
            Stage::Building => "🔨 Building",
            Stage::BuildFailed => "💥 Build Failed",
            Stage::PrototypeBuilt => "🧪 Prototype Built",
            Stage::SendLoom => "🎥 Send Loom",
            Stage::Deployed => "🚀 Deployed",
            Stage::InitialMessageSent => "📨 Initial Message Sent",
            Stage::Touchpoint1 => "📬 Touchpoint 1",
            Stage::Touchpoint2 => "📬 Touchpoint 2",
            Stage::Touchpoint3 => "📬 Touchpoint 3",
            Stage::LightEngagement => "💬 Light Engagement",
            Stage::EngagementWithPrototype => "🔥 Engaged With Prototype",
            Stage::ClosedWon => "🏆 Closed Won",
            Stage::ClosedLost => "🪦 Closed Lost",
        }
    }

    /// Plain display name without the glyph, for logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::PendingApproval => "Pending Approval",
            Stage::Approved => "Approved",
            Stage::Rejected => "Rejected",
            Stage::Building => "Building",
            Stage::BuildFailed => "Build Failed",
            Stage::PrototypeBuilt => "Prototype Built",
            Stage::SendLoom => "Send Loom",
            Stage::Deployed => "Deployed",
            Stage::InitialMessageSent => "Initial Message Sent",
            Stage::Touchpoint1 => "Touchpoint 1",
            Stage::Touchpoint2 => "Touchpoint 2",
            Stage::Touchpoint3 => "Touchpoint 3",
            Stage::LightEngagement => "Light Engagement",
            Stage::EngagementWithPrototype => "Engaged With Prototype",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
        }
    }

    /// Parse a store token by exact equality. Unknown or empty tokens
    /// return `None` — the caller drops the record from classification.
    pub fn parse(token: &str) -> Option<Stage> {
        ALL_STAGES.iter().copied().find(|s| s.as_str() == token)
    }

    /// Terminal stages never advance again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::ClosedWon | Stage::ClosedLost)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the store token, matching the wire format everywhere.
impl serde::Serialize for Stage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Client response classification on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Message,
    Shortlist,
    Interview,
    Hire,
    Decline,
    HiredOther,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Message => "💬 Message",
            ResponseType::Shortlist => "⭐ Shortlist",
            ResponseType::Interview => "🎙 Interview",
            ResponseType::Hire => "🤝 Hire",
            ResponseType::Decline => "🚫 Decline",
            ResponseType::HiredOther => "👻 Hired Other",
        }
    }

    pub fn parse(token: &str) -> Option<ResponseType> {
        [
            ResponseType::Message,
            ResponseType::Shortlist,
            ResponseType::Interview,
            ResponseType::Hire,
            ResponseType::Decline,
            ResponseType::HiredOther,
        ]
        .iter()
        .copied()
        .find(|r| r.as_str() == token)
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ResponseType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Successor stage under the "advance on follow-up" action.
///
/// Strict partial function: only the outreach chain has entries.
/// Initial Message Sent → Touchpoint 1 → 2 → 3 → Closed Lost.
/// Everything else (engagement stages, terminal stages, build stages)
/// has no progression — looking one up is an error, not a no-op.
pub fn next_follow_up_stage(stage: Stage) -> Result<Stage, PipelineError> {
    match stage {
        Stage::InitialMessageSent => Ok(Stage::Touchpoint1),
        Stage::Touchpoint1 => Ok(Stage::Touchpoint2),
        Stage::Touchpoint2 => Ok(Stage::Touchpoint3),
        Stage::Touchpoint3 => Ok(Stage::ClosedLost),
        other => Err(PipelineError::NoProgression {
            stage: other.as_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for stage in ALL_STAGES {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn unknown_and_empty_tokens_parse_to_none() {
        assert_eq!(Stage::parse(""), None);
        assert_eq!(Stage::parse("Touchpoint 1"), None); // glyph stripped
        assert_eq!(Stage::parse("📬 Touchpoint 4"), None);
    }

    #[test]
    fn follow_up_chain_reaches_closed_lost_in_four_steps() {
        let mut stage = Stage::InitialMessageSent;
        for _ in 0..4 {
            stage = next_follow_up_stage(stage).unwrap();
        }
        assert_eq!(stage, Stage::ClosedLost);

        let err = next_follow_up_stage(stage).unwrap_err();
        assert!(matches!(err, PipelineError::NoProgression { .. }));
    }

    #[test]
    fn stages_outside_the_chain_have_no_progression() {
        for stage in [
            Stage::New,
            Stage::PendingApproval,
            Stage::Deployed,
            Stage::LightEngagement,
            Stage::EngagementWithPrototype,
            Stage::ClosedWon,
        ] {
            assert!(next_follow_up_stage(stage).is_err(), "{stage} should not advance");
        }
    }

    #[test]
    fn no_progression_error_names_the_stage() {
        let err = next_follow_up_stage(Stage::ClosedWon).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no progression defined for stage: 🏆 Closed Won"
        );
    }

    #[test]
    fn response_tokens_round_trip() {
        for r in [
            ResponseType::Message,
            ResponseType::Shortlist,
            ResponseType::Interview,
            ResponseType::Hire,
            ResponseType::Decline,
            ResponseType::HiredOther,
        ] {
            assert_eq!(ResponseType::parse(r.as_str()), Some(r));
        }
        assert_eq!(ResponseType::parse("Shortlist"), None);
    }
}
