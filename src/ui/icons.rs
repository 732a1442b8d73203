pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const DATABASE: &str = "🗄️";
    pub const PERSON: &str = "👤";
    pub const TRUCK: &str = "🚚";
    pub const HOUSE: &str = "🏠";
    pub const DEL: &str = "🗑️";
    pub const EMPTY: &str = "∅";
}
