use haven_core::cards::{Accent, TrendDirection};

/// Icon tile classes for a card accent.
pub fn accent_classes(accent: Accent) -> &'static str {
    match accent {
        Accent::Teal => "bg-teal-500/10 text-teal-400",
        Accent::Blue => "bg-blue-500/10 text-blue-400",
        Accent::Green => "bg-emerald-500/10 text-emerald-400",
        Accent::Purple => "bg-purple-500/10 text-purple-400",
        Accent::Orange => "bg-amber-500/10 text-amber-400",
        Accent::Pink => "bg-pink-500/10 text-pink-400",
        Accent::Indigo => "bg-indigo-500/10 text-indigo-400",
        Accent::Red => "bg-red-500/10 text-red-400",
    }
}

pub fn trend_classes(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "text-success",
        TrendDirection::Down => "text-destructive",
    }
}
