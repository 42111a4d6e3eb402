//! Mock content shown by the onboarding screens. Labels are looked up in the
//! Fluent bundle by the keys returned here; names and handles are not
//! translated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceCategory {
    pub id: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friend {
    pub id: u32,
    pub name: &'static str,
    pub handle: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub phone: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSample {
    pub kind: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCard {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoPrompt {
    pub id: &'static str,
    pub tilt: &'static str,
}

pub const PREFERENCE_CATEGORIES: &[PreferenceCategory] = &[
    PreferenceCategory { id: "live-music", icon: "🎵" },
    PreferenceCategory { id: "clubs-parties", icon: "🎉" },
    PreferenceCategory { id: "workshops-talks", icon: "💡" },
    PreferenceCategory { id: "food-festivals", icon: "🍕" },
    PreferenceCategory { id: "cultural-events", icon: "🎭" },
    PreferenceCategory { id: "health-fitness", icon: "💪" },
    PreferenceCategory { id: "mindfulness-self-care", icon: "🧘" },
    PreferenceCategory { id: "lifestyle", icon: "✨" },
    PreferenceCategory { id: "networking-meetups", icon: "🤝" },
    PreferenceCategory { id: "gaming", icon: "🎮" },
    PreferenceCategory { id: "popup-shops", icon: "🛍️" },
    PreferenceCategory { id: "creative-experiences", icon: "🎨" },
    PreferenceCategory { id: "others", icon: "🌟" },
];

pub const SUGGESTED_FRIENDS: &[Friend] = &[
    Friend { id: 1, name: "Liam Johnson", handle: "@liamjohnson", avatar: "👨‍💼" },
    Friend { id: 2, name: "Ava Brown", handle: "@avabrown.com", avatar: "👩‍🦱" },
    Friend { id: 3, name: "Noah Williams", handle: "@noahwilliams", avatar: "👨‍🎨" },
    Friend { id: 4, name: "Zoe Davis", handle: "@zoedavis", avatar: "👩‍💻" },
];

pub const CONTACTS: &[Contact] = &[
    Contact { id: 5, name: "Liam Johnson", phone: "+1234567890", avatar: "👨‍💼" },
    Contact { id: 6, name: "Emma Brown", phone: "+1234567891", avatar: "👩‍🦰" },
    Contact { id: 7, name: "Oliver Smith", phone: "+1234567892", avatar: "👨‍🚀" },
    Contact { id: 8, name: "Noah Williams", phone: "+1234567893", avatar: "👨‍🎨" },
    Contact { id: 9, name: "Ava Martinez", phone: "+1234567894", avatar: "👩‍🎤" },
];

pub const NOTIFICATION_SAMPLES: &[NotificationSample] = &[
    NotificationSample { kind: "friend", icon: "👥" },
    NotificationSample { kind: "reminder", icon: "🎫" },
    NotificationSample { kind: "capture", icon: "📸" },
];

pub const FEATURED_EVENTS: &[EventCard] = &[
    EventCard { id: 1, title: "Block Party", image: "🎪", accent: "event-card--purple" },
    EventCard { id: 2, title: "Lagosfest", image: "🎵", accent: "event-card--orange" },
    EventCard { id: 3, title: "Coachella", image: "🌴", accent: "event-card--yellow" },
    EventCard { id: 4, title: "Red Cup Throwdown", image: "🏆", accent: "event-card--red" },
    EventCard { id: 5, title: "ALT+PARTY", image: "🎮", accent: "event-card--blue" },
    EventCard { id: 6, title: "Flex Fridays", image: "💪", accent: "event-card--green" },
];

pub const PHOTO_PROMPTS: &[PhotoPrompt] = &[
    PhotoPrompt { id: "getting-ready", tilt: "polaroid--right" },
    PhotoPrompt { id: "in-the-moment", tilt: "polaroid--left" },
    PhotoPrompt { id: "post-event-recap", tilt: "polaroid--slight" },
];

impl PreferenceCategory {
    pub fn label_key(&self) -> String {
        format!("pref-{}", self.id)
    }
}

impl NotificationSample {
    pub fn text_key(&self) -> String {
        format!("notifications-sample-{}", self.kind)
    }
}

impl PhotoPrompt {
    pub fn caption_key(&self) -> String {
        format!("photo-caption-{}", self.id)
    }
}

/// Case-insensitive name filter for the friends search box. A blank query
/// matches everyone.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Every dynamic Fluent key the catalog refers to.
pub fn label_keys() -> Vec<String> {
    PREFERENCE_CATEGORIES
        .iter()
        .map(PreferenceCategory::label_key)
        .chain(NOTIFICATION_SAMPLES.iter().map(NotificationSample::text_key))
        .chain(PHOTO_PROMPTS.iter().map(PhotoPrompt::caption_key))
        .collect()
}
