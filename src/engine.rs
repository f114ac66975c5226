// src/engine.rs — Purchase assessment rules
//
// The decision core: bucket the amount into a cost tier, then run the
// (tier, intent) pair through a fixed rule table. First matching rule
// wins. Pure and deterministic.

/// User-declared reason for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Replacement,
    Upgrade,
    Impulse,
}

impl Intent {
    /// Parse the wire slug carried in `intent_<slug>` callback payloads.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "replacement" => Some(Intent::Replacement),
            "upgrade" => Some(Intent::Upgrade),
            "impulse" => Some(Intent::Impulse),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Intent::Replacement => "replacement",
            Intent::Upgrade => "upgrade",
            Intent::Impulse => "impulse",
        }
    }

    /// Capitalized label for the verdict summary.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Replacement => "Replacement",
            Intent::Upgrade => "Upgrade",
            Intent::Impulse => "Impulse",
        }
    }
}

/// Amount bucketed by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    /// `> 50_000` is High, `> 20_000` is Medium, everything else
    /// (negative amounts included) is Low.
    pub fn from_amount(amount: i64) -> Self {
        if amount > 50_000 {
            CostTier::High
        } else if amount > 20_000 {
            CostTier::Medium
        } else {
            CostTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
        }
    }
}

/// Final recommendation category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reasonable,
    Pause,
    Careful,
    Wait,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Reasonable => "🟢 Reasonable",
            Verdict::Pause => "⚠️ Pause",
            Verdict::Careful => "🟡 Careful",
            Verdict::Wait => "⚠️ Wait",
        }
    }
}

/// Classifier output: the tier the amount fell into, the verdict, and the
/// advice line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub tier: CostTier,
    pub verdict: Verdict,
    pub advice: &'static str,
}

/// Map an amount and intent to a verdict.
pub fn assess(amount: i64, intent: Intent) -> Assessment {
    let tier = CostTier::from_amount(amount);
    let (verdict, advice) = match (tier, intent) {
        (CostTier::High, Intent::Upgrade) => (
            Verdict::Wait,
            "High-cost upgrade with low urgency. Waiting 7 days is wise.",
        ),
        (CostTier::High, Intent::Replacement) => (
            Verdict::Careful,
            "Necessary but expensive. Compare options.",
        ),
        (CostTier::Medium, Intent::Impulse) => (
            Verdict::Pause,
            "Impulse purchases at this level are often regretted.",
        ),
        _ => (Verdict::Reasonable, "This decision looks manageable."),
    };
    Assessment {
        tier,
        verdict,
        advice,
    }
}
