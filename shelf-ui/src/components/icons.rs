//! Lucide icons (https://lucide.dev) used by the list views
//!
//! Stroke is `currentColor`, so icons take their color from the text class.

use dioxus::prelude::*;

#[component]
fn Lucide(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            aria_hidden: "true",
            {children}
        }
    }
}

#[component]
pub fn ChevronLeftIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class, path { d: "m15 18-6-6 6-6" } }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class, path { d: "m9 18 6-6-6-6" } }
    }
}

/// Column sorted ascending
#[component]
pub fn ArrowUpIcon(#[props(default = "w-3.5 h-3.5")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        }
    }
}

/// Column sorted descending
#[component]
pub fn ArrowDownIcon(#[props(default = "w-3.5 h-3.5")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "M12 5v14" }
            path { d: "m19 12-7 7-7-7" }
        }
    }
}

/// Sortable but unsorted column
#[component]
pub fn ArrowUpDownIcon(#[props(default = "w-3.5 h-3.5")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "m21 16-4 4-4-4" }
            path { d: "M17 20V4" }
            path { d: "m3 8 4-4 4 4" }
            path { d: "M7 4v16" }
        }
    }
}

#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn PlusIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn FilterIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
        }
    }
}

#[component]
pub fn ColumnsIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            path { d: "M12 3v18" }
        }
    }
}

#[component]
pub fn RefreshIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

#[component]
pub fn AlertTriangleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

/// Empty tray, for lists with no rows
#[component]
pub fn InboxIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        Lucide { class,
            polyline { points: "22 12 16 12 14 15 10 15 8 12 2 12" }
            path { d: "M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z" }
        }
    }
}
