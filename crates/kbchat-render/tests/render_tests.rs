use serde_json::json;

use kbchat_core::config::RenderSettings;
use kbchat_core::types::TopicValue;
use kbchat_render::TemplateRenderer;

fn value(v: serde_json::Value) -> TopicValue {
    serde_json::from_value(v).expect("topic value")
}

fn render(topic: &str, v: serde_json::Value) -> String {
    TemplateRenderer::default().render_value(topic, &value(v))
}

#[test]
fn plain_text_is_verbatim() {
    assert_eq!(render("admissions", json!("Apply at the office.")), "Apply at the office.");
}

#[test]
fn department_list_has_header_bullets_and_footer() {
    let out = render("departments", json!(["Computer Science Engineering", "Mechanical Engineering"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "🎓 **Academic Programs at MIT Kundapura**");
    assert_eq!(lines[2], "We offer the following programs:");
    assert_eq!(lines[4], "- Computer Science Engineering");
    assert_eq!(lines[5], "- Mechanical Engineering");
    assert!(lines.last().unwrap().starts_with("Each department is equipped"));
}

#[test]
fn department_groups_render_each_category() {
    let out = render(
        "departments",
        json!({"under_graduate": ["CSE", "ME"], "post_graduate": "MBA"}),
    );
    let expected = "🎓 **Academic Programs at MIT Kundapura**\n\n**Under Graduate:**\n- CSE\n- ME\n\n**Post Graduate:**\n- MBA\n\nEach department is equipped with experienced faculty and modern facilities to ensure quality education!";
    assert_eq!(out, expected);
}

#[test]
fn labs_use_humanized_names_in_config_order() {
    let out = render("labs", json!({"robotics_lab": "Arms and sensors.", "cad_lab": "Design suites."}));
    let robotics = out.find("🏭 **Robotics Lab**").expect("robotics");
    let cad = out.find("🏭 **Cad Lab**").expect("cad");
    assert!(robotics < cad);
    assert!(out.contains("\n   Arms and sensors.\n"));
}

#[test]
fn placements_fill_missing_stats_with_na() {
    let out = render(
        "placements",
        json!({"overview": "Strong record.", "stats_2024_2025": {"placement_rate": "92%", "top_recruiters": ["Infosys", "TCS"]}}),
    );
    assert!(out.contains("📊 Strong record."));
    assert!(out.contains("✅ Placement Success Rate: **92%**"));
    assert!(out.contains("💰 Average Package: **N/A**"));
    assert!(out.contains("🏆 Highest Package Offered: **N/A**"));
    assert!(out.contains("🏢 Leading Recruiters: **Infosys, TCS**"));
}

#[test]
fn placements_without_stats_stop_after_overview() {
    let out = render("placements", json!({"overview": "Strong record."}));
    assert_eq!(out, "🎯 **MIT Kundapura Placement Excellence**\n\n📊 Strong record.");
    let out = render("placements", json!({"stats_2024_2025": {"top_recruiters": []}}));
    assert!(out.contains("📊 \n"), "missing overview renders empty");
    assert!(!out.contains("Leading Recruiters"), "empty recruiter list is skipped");
}

#[test]
fn events_pick_icons_by_category() {
    let out = render(
        "events",
        json!({"cultural": ["Utsav"], "technical_fests": ["Hackathon", "Expo"], "sports": "Annual meet", "clubs": []}),
    );
    assert!(out.contains("🎭 **Cultural:** Utsav"));
    assert!(out.contains("⚡ **Technical_Fests:** Hackathon, Expo"));
    assert!(out.contains("🏆 **Sports:** Annual meet"));
    assert!(out.contains("🎪 **Clubs:** "));
}

#[test]
fn contact_info_uses_na_for_missing_fields() {
    let out = render("contact_info", json!({"email": "info@mitk.ac.in", "phone": 9876543210u64}));
    assert!(out.contains("📧 **Email:** info@mitk.ac.in"));
    assert!(out.contains("☎️ **Phone:** 9876543210"));
    assert!(out.contains("📍 **Address:** N/A"));
}

#[test]
fn head_of_department_skips_absent_fields() {
    let out = render("hod_cs", json!({"name": "Dr. A", "department": "Computer Science"}));
    assert_eq!(
        out,
        "👨‍🏫 **CSE Head of Department**\n\n• **Name:** Dr. A\n• **Department:** Computer Science"
    );
}

#[test]
fn head_of_department_name_falls_back() {
    let out = render("hod_cs", json!({"info": "Prof. B", "note": "Meets students on Fridays."}));
    assert!(out.contains("• **Name:** Prof. B"));
    assert!(out.ends_with("• Meets students on Fridays."));

    let out = render("hod_cs", json!({"designation": "Professor"}));
    assert!(out.contains("• **Name:** Mr. Muralidhara B K"));
    assert!(out.contains("• **Designation:** Professor"));

    let out = render("hod_mech", json!({}));
    assert!(out.starts_with("👨‍🏫 **MECH Head of Department**"));
    assert!(out.contains("• **Name:** N/A"));
}

#[test]
fn unknown_mapping_uses_generic_listing() {
    let out = render("hostel", json!({"boys_hostel": "Available", "capacity": 400}));
    assert_eq!(
        out,
        "ℹ️ **Information about Hostel:**\n\n• **Boys Hostel:** Available\n• **Capacity:** 400"
    );
}

#[test]
fn odd_shapes_are_stringified() {
    assert_eq!(render("fees", json!(42)), "42");
    assert_eq!(render("fees", json!(null)), "N/A");
    assert_eq!(render("library", json!(["Mon", "Tue"])), "Mon, Tue");
    assert_eq!(render("labs", json!(true)), "Yes");
}

#[test]
fn institution_name_is_configurable() {
    let renderer = TemplateRenderer::new(RenderSettings { institution: "Example College".into() });
    let out = renderer.render_value("contact_info", &value(json!({})));
    assert!(out.starts_with("📞 **Get in Touch with Example College**"));
}
