use crate::record::EntityKind;

pub struct Icons;

impl Icons {
    pub const GLOBE: &str = "🌍";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const HOUSE: &str = "🏡";
    pub const BRAIN: &str = "🧠";
    pub const EMPTY: &str = "∅";

    /// Section icon for an entity kind
    pub fn for_kind(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Investment => Self::STATS,
            EntityKind::Project => Self::HOUSE,
            EntityKind::Idea => Self::BRAIN,
        }
    }
}
