//! Page content model.
//!
//! A [`Page`] is the contract between the widget controllers and the content
//! they attach to, the way markup markers would be in a document. Every
//! section is optional; a missing section simply means the corresponding
//! widget never initializes. Optional tuning knobs (slideshow interval,
//! marquee speed, breakpoint, scroll threshold) fall back to documented
//! defaults when absent or out of range.

use serde::{Deserialize, Serialize};

/// Default autoplay interval for slideshows, in milliseconds.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;
/// Default marquee scroll speed, in cells per second.
pub const DEFAULT_MARQUEE_SPEED: f32 = 12.0;
/// Default gap between marquee items, in cells.
pub const DEFAULT_MARQUEE_GAP: u16 = 3;
/// Default terminal width, in columns, at which the page counts as "wide".
pub const DEFAULT_WIDE_BREAKPOINT: u16 = 90;
/// Default scroll offset, in rows, past which the back-to-top control shows.
pub const DEFAULT_TOP_THRESHOLD: u16 = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub nav: Option<NavSpec>,
    #[serde(default)]
    pub slideshow: Option<SlideshowSpec>,
    #[serde(default)]
    pub marquee: Option<MarqueeSpec>,
    #[serde(default)]
    pub tabs: Option<TabsSpec>,
    #[serde(default)]
    pub form: Option<FormSpec>,
    #[serde(default)]
    pub back_to_top: Option<BackToTopSpec>,
    /// Free-flowing body copy shown in the scrollable content pane.
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSpec {
    pub links: Vec<String>,
    /// Terminal width at which the collapsed menu stops making sense.
    #[serde(default)]
    pub wide_breakpoint: Option<u16>,
}

impl NavSpec {
    pub fn breakpoint(&self) -> u16 {
        match self.wide_breakpoint {
            Some(cols) if cols > 0 => cols,
            _ => DEFAULT_WIDE_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowSpec {
    pub slides: Vec<SlideSpec>,
    /// Autoplay interval in milliseconds.
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

impl SlideshowSpec {
    pub fn interval_ms(&self) -> u64 {
        match self.interval_ms {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_SLIDE_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,
    pub caption: String,
    /// Marks the slide the page wants shown first.
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeSpec {
    pub items: Vec<MarqueeItemSpec>,
    /// Scroll speed in cells per second.
    #[serde(default)]
    pub speed: Option<f32>,
    /// Gap between items in cells.
    #[serde(default)]
    pub gap: Option<u16>,
}

impl MarqueeSpec {
    pub fn speed(&self) -> f32 {
        match self.speed {
            Some(s) if s > 0.0 => s,
            _ => DEFAULT_MARQUEE_SPEED,
        }
    }

    pub fn gap(&self) -> u16 {
        self.gap.unwrap_or(DEFAULT_MARQUEE_GAP)
    }
}

/// One entry in the marquee strip.
///
/// `Badge` items are the deferred kind: their display text is produced by
/// the background asset loader, and the marquee holds its scroll clock until
/// every badge on the page has resolved so the segment measurement is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MarqueeItemSpec {
    Text(String),
    Badge { name: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsSpec {
    pub tabs: Vec<TabSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSpec {
    pub label: String,
    pub panel: Vec<String>,
    /// A panel the page ships hidden; initial selection skips it.
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackToTopSpec {
    /// Scroll offset in rows past which the control becomes visible.
    #[serde(default)]
    pub threshold: Option<u16>,
}

impl BackToTopSpec {
    pub fn threshold(&self) -> u16 {
        match self.threshold {
            Some(rows) if rows > 0 => rows,
            _ => DEFAULT_TOP_THRESHOLD,
        }
    }
}

impl Page {
    /// Parses a page definition from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the page back to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The built-in demonstration page exercising every widget.
    pub fn demo() -> Self {
        Self {
            title: "New Dimension".into(),
            nav: Some(NavSpec {
                links: vec![
                    "Home".into(),
                    "Services".into(),
                    "Work".into(),
                    "About".into(),
                    "Contact".into(),
                ],
                wide_breakpoint: None,
            }),
            slideshow: Some(SlideshowSpec {
                slides: vec![
                    SlideSpec {
                        title: "Design that scales".into(),
                        caption: "From one-pagers to platforms.".into(),
                        active: false,
                    },
                    SlideSpec {
                        title: "Built for people".into(),
                        caption: "Accessible by default, fast by habit.".into(),
                        active: true,
                    },
                    SlideSpec {
                        title: "Shipped together".into(),
                        caption: "Small teams, short loops.".into(),
                        active: false,
                    },
                ],
                interval_ms: Some(4000),
            }),
            marquee: Some(MarqueeSpec {
                items: vec![
                    MarqueeItemSpec::Badge {
                        name: "Northwind".into(),
                    },
                    MarqueeItemSpec::Text("Acme Co".into()),
                    MarqueeItemSpec::Badge {
                        name: "Globex".into(),
                    },
                    MarqueeItemSpec::Text("Initech".into()),
                    MarqueeItemSpec::Text("Umbrella".into()),
                ],
                speed: None,
                gap: None,
            }),
            tabs: Some(TabsSpec {
                tabs: vec![
                    TabSpec {
                        label: "Strategy".into(),
                        panel: vec![
                            "We start with the problem, not the deliverable.".into(),
                            "Short discovery, honest scoping, measurable goals.".into(),
                        ],
                        hidden: false,
                    },
                    TabSpec {
                        label: "Design".into(),
                        panel: vec![
                            "Interface work grounded in real content.".into(),
                            "Prototypes over promises.".into(),
                        ],
                        hidden: true,
                    },
                    TabSpec {
                        label: "Build".into(),
                        panel: vec![
                            "Boring technology, exciting results.".into(),
                            "Shipped in weeks, maintained for years.".into(),
                        ],
                        hidden: true,
                    },
                ],
            }),
            form: Some(FormSpec {
                title: "Get in touch".into(),
                fields: vec![
                    FieldSpec {
                        label: "Name".into(),
                        kind: FieldKind::Text,
                        required: true,
                    },
                    FieldSpec {
                        label: "Email".into(),
                        kind: FieldKind::Email,
                        required: true,
                    },
                    FieldSpec {
                        label: "Message".into(),
                        kind: FieldKind::Text,
                        required: false,
                    },
                ],
            }),
            back_to_top: Some(BackToTopSpec { threshold: None }),
            body: demo_body(),
        }
    }
}

fn demo_body() -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("New Dimension is a small studio making calm software.".into());
    lines.push(String::new());
    for section in [
        "What we do",
        "How we work",
        "Who we are",
        "Where to find us",
    ] {
        lines.push(format!("## {section}"));
        for i in 1..=8 {
            lines.push(format!(
                "{section} — paragraph {i}: steady, readable filler copy so the \
                 content pane has something worth scrolling through."
            ));
        }
        lines.push(String::new());
    }
    lines.push("Thanks for scrolling all the way down here.".into());
    lines
}
