//! Bloodstain pattern taxonomy and forensic metadata.
//!
//! The eight recognized pattern kinds are a fixed enum rather than
//! free-form string tags, so an unknown tag is a parse failure at the
//! data boundary instead of a silent lookup miss inside the game.
//! Case packs and snapshots still speak the kebab-case tags
//! (`"passive-drops"`, `"cast-off"`, ...) via [`PatternKind::tag`] and
//! [`PatternKind::from_tag`].

use serde::{Deserialize, Serialize};

/// A bloodstain pattern category an analysis point can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Small, round, spaced dots from a stationary source.
    PassiveDrops,
    /// Arced lines flung from a swinging object.
    CastOff,
    /// Fine mist from blunt-force trauma.
    ImpactSpatter,
    /// Elongated smears with motion direction.
    Swipe,
    /// Disturbed stains over existing blood.
    Wipe,
    /// Clean area amid blood spray.
    Void,
    /// Linear path of drops from a moving source.
    DripTrail,
    /// Pulsing arcs from a severed artery.
    ArterialSpray,
}

/// Static forensic metadata for a pattern kind.
#[derive(Debug, Clone, Copy)]
pub struct PatternInfo {
    /// Display name shown on markers and selector buttons.
    pub name: &'static str,
    /// What the stain looks like.
    pub description: &'static str,
    /// What the stain implies about the event.
    pub implication: &'static str,
    /// Canned feedback shown on a correct identification.
    pub feedback: &'static str,
}

impl PatternKind {
    /// All pattern kinds, in selector display order.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::PassiveDrops,
        PatternKind::CastOff,
        PatternKind::ImpactSpatter,
        PatternKind::Swipe,
        PatternKind::Wipe,
        PatternKind::Void,
        PatternKind::DripTrail,
        PatternKind::ArterialSpray,
    ];

    /// Stable kebab-case tag used in case packs and snapshots.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PassiveDrops => "passive-drops",
            Self::CastOff => "cast-off",
            Self::ImpactSpatter => "impact-spatter",
            Self::Swipe => "swipe",
            Self::Wipe => "wipe",
            Self::Void => "void",
            Self::DripTrail => "drip-trail",
            Self::ArterialSpray => "arterial-spray",
        }
    }

    /// Parse a kebab-case tag. Unknown tags map to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "passive-drops" => Some(Self::PassiveDrops),
            "cast-off" => Some(Self::CastOff),
            "impact-spatter" => Some(Self::ImpactSpatter),
            "swipe" => Some(Self::Swipe),
            "wipe" => Some(Self::Wipe),
            "void" => Some(Self::Void),
            "drip-trail" => Some(Self::DripTrail),
            "arterial-spray" => Some(Self::ArterialSpray),
            _ => None,
        }
    }

    pub fn info(&self) -> PatternInfo {
        match self {
            Self::PassiveDrops => PatternInfo {
                name: "Passive Drops",
                description: "Small, round, spaced dots",
                implication: "Blood dripped from a stationary position",
                feedback: "Correct. Passive drops indicate the source was stationary and bleeding from a fixed height.",
            },
            Self::CastOff => PatternInfo {
                name: "Cast-Off",
                description: "Arced lines or dotted streaks",
                implication: "Came off a swinging object (e.g., weapon)",
                feedback: "Correct. Cast-off patterns result from blood being flung from a moving object in an arc.",
            },
            Self::ImpactSpatter => PatternInfo {
                name: "Impact Spatter",
                description: "Fine mist, scattered tiny droplets",
                implication: "Caused by blunt-force trauma",
                feedback: "Correct. Impact spatter creates fine droplets when blood is forcibly projected from the source.",
            },
            Self::Swipe => PatternInfo {
                name: "Swipe",
                description: "Elongated smears with motion direction",
                implication: "Something bloody was dragged/moved",
                feedback: "Correct. Swipe patterns show lateral movement of a bloody object across a surface.",
            },
            Self::Wipe => PatternInfo {
                name: "Wipe",
                description: "Disturbed stains over blood",
                implication: "Someone tried to erase or manipulate evidence",
                feedback: "Correct. Wipe patterns indicate an attempt to clean or alter existing bloodstains.",
            },
            Self::Void => PatternInfo {
                name: "Void",
                description: "Clean area amid blood spray",
                implication: "An object or person blocked the pattern",
                feedback: "Correct. Void patterns show where an obstruction prevented blood from reaching the surface.",
            },
            Self::DripTrail => PatternInfo {
                name: "Drip Trail",
                description: "Linear path of drops",
                implication: "Victim or suspect moved while bleeding",
                feedback: "Correct. Drip trails indicate movement of a bleeding individual.",
            },
            Self::ArterialSpray => PatternInfo {
                name: "Arterial Spray",
                description: "Pulsing arcs, heavy projection",
                implication: "Major artery struck—victim alive and moving",
                feedback: "Correct. Arterial spray shows rhythmic patterns consistent with heartbeat and blood pressure.",
            },
        }
    }
}
