//! Per-topic answer templates.
//!
//! Each template pulls a fixed set of fields in a fixed order. A missing
//! field is either skipped or printed as `N/A`, as noted per template.

use kbchat_core::types::TopicValue;

use crate::text::{humanize_key, title_case};

const NA: &str = "N/A";
const DEPARTMENTS_FOOTER: &str =
    "Each department is equipped with experienced faculty and modern facilities to ensure quality education!";

/// Known fallback names for department heads, used when the payload has neither
/// `name` nor `info`.
const HOD_FALLBACK_NAMES: &[(&str, &str)] = &[("hod_cs", "Mr. Muralidhara B K")];

fn text_or(value: &TopicValue, key: &str, default: &str) -> String {
    value.field(key).map_or_else(|| default.to_string(), ToString::to_string)
}

fn present<'a>(value: &'a TopicValue, key: &str) -> Option<&'a TopicValue> {
    value.field(key).filter(|v| !v.is_blank())
}

fn departments_header(institution: &str) -> String {
    format!("🎓 **Academic Programs at {institution}**")
}

/// `departments` stored as a flat list of program names.
pub fn department_list(institution: &str, items: &[TopicValue]) -> String {
    let mut lines = vec![
        departments_header(institution),
        String::new(),
        "We offer the following programs:".to_string(),
        String::new(),
    ];
    lines.extend(items.iter().map(|d| format!("- {d}")));
    lines.push(String::new());
    lines.push(DEPARTMENTS_FOOTER.to_string());
    lines.join("\n")
}

/// `departments` grouped by category: each category gets a heading and bullets.
pub fn department_groups(institution: &str, value: &TopicValue) -> String {
    let mut lines = vec![departments_header(institution), String::new()];
    for (category, items) in value.as_map().into_iter().flatten() {
        lines.push(format!("**{}:**", humanize_key(category)));
        match items {
            TopicValue::List(list) => lines.extend(list.iter().map(|item| format!("- {item}"))),
            other => lines.push(format!("- {other}")),
        }
        lines.push(String::new());
    }
    lines.push(DEPARTMENTS_FOOTER.to_string());
    lines.join("\n")
}

pub fn labs(institution: &str, value: &TopicValue) -> String {
    let mut lines = vec![
        format!("🔬 {institution} boasts state-of-the-art laboratory facilities:"),
        String::new(),
    ];
    for (name, desc) in value.as_map().into_iter().flatten() {
        lines.push(format!("🏭 **{}**", humanize_key(name)));
        lines.push(format!("   {desc}"));
        lines.push(String::new());
    }
    lines.push("These labs provide hands-on experience essential for your professional development!".to_string());
    lines.join("\n")
}

/// Overview line always; the highlights block only when `stats_2024_2025` exists.
pub fn placements(institution: &str, value: &TopicValue) -> String {
    let mut lines = vec![
        format!("🎯 **{institution} Placement Excellence**"),
        String::new(),
        format!("📊 {}", text_or(value, "overview", "")),
    ];
    if let Some(stats) = value.field("stats_2024_2025") {
        lines.push(String::new());
        lines.push("📈 **2024-25 Placement Highlights:**".to_string());
        lines.push(format!("✅ Placement Success Rate: **{}**", text_or(stats, "placement_rate", NA)));
        lines.push(format!("💰 Average Package: **{}**", text_or(stats, "average_package", NA)));
        lines.push(format!("🏆 Highest Package Offered: **{}**", text_or(stats, "highest_package", NA)));
        if let Some(recruiters) = present(stats, "top_recruiters") {
            lines.push(format!("🏢 Leading Recruiters: **{recruiters}**"));
        }
        lines.push(String::new());
        lines.push(
            "Our dedicated placement cell works tirelessly to connect students with top industry opportunities!"
                .to_string(),
        );
    }
    lines.join("\n")
}

fn event_icon(category: &str) -> &'static str {
    if category.contains("cultural") {
        "🎭"
    } else if category.contains("technical") {
        "⚡"
    } else if category.contains("sports") {
        "🏆"
    } else {
        "🎪"
    }
}

pub fn events(institution: &str, value: &TopicValue) -> String {
    let mut lines = vec![
        format!("🎉 **{institution} - Where Learning Meets Fun!**"),
        String::new(),
        "Our campus buzzes with exciting events throughout the year:".to_string(),
        String::new(),
    ];
    for (category, list) in value.as_map().into_iter().flatten() {
        lines.push(format!("{} **{}:** {list}", event_icon(category), title_case(category)));
    }
    lines.push(String::new());
    lines.push("Join us for an unforgettable college experience filled with learning, growth, and memories!".to_string());
    lines.join("\n")
}

/// Email, phone and address, each `N/A` when missing.
pub fn contact_info(institution: &str, value: &TopicValue) -> String {
    [
        format!("📞 **Get in Touch with {institution}**"),
        String::new(),
        "We're here to help and answer all your questions:".to_string(),
        String::new(),
        format!("📧 **Email:** {}", text_or(value, "email", NA)),
        format!("☎️ **Phone:** {}", text_or(value, "phone", NA)),
        format!("📍 **Address:** {}", text_or(value, "address", NA)),
        String::new(),
        "Feel free to reach out anytime - we'd love to hear from you!".to_string(),
    ]
    .join("\n")
}

fn department_label(topic: &str) -> String {
    match topic.trim_start_matches("hod_") {
        "cs" => "CSE".to_string(),
        "ec" => "ECE".to_string(),
        "ee" => "EEE".to_string(),
        other => other.replace('_', " ").to_uppercase(),
    }
}

/// Name (`name`, else `info`, else a known fallback, else `N/A`), then
/// designation, department and note only when present.
pub fn head_of_department(topic: &str, value: &TopicValue) -> String {
    let fallback = HOD_FALLBACK_NAMES
        .iter()
        .find(|(t, _)| *t == topic)
        .map_or(NA, |&(_, name)| name);
    let name = present(value, "name")
        .or_else(|| present(value, "info"))
        .map_or_else(|| fallback.to_string(), ToString::to_string);

    let mut lines = vec![
        format!("👨‍🏫 **{} Head of Department**", department_label(topic)),
        String::new(),
        format!("• **Name:** {name}"),
    ];
    if let Some(designation) = present(value, "designation") {
        lines.push(format!("• **Designation:** {designation}"));
    }
    if let Some(department) = present(value, "department") {
        lines.push(format!("• **Department:** {department}"));
    }
    if let Some(note) = present(value, "note") {
        lines.push(format!("• {note}"));
    }
    lines.join("\n")
}

/// Any other mapping: one humanized `label: value` line per field.
pub fn generic(topic: &str, value: &TopicValue) -> String {
    let mut lines = vec![format!("ℹ️ **Information about {}:**", title_case(topic)), String::new()];
    for (key, field) in value.as_map().into_iter().flatten() {
        lines.push(format!("• **{}:** {field}", humanize_key(key)));
    }
    lines.join("\n")
}
