pub fn ready_prompt(institution: &str) -> String {
    format!("I'm ready to help! 🤖 Please ask me anything about {institution} - admissions, placements, facilities, or any other topic you're curious about.")
}

pub const FALLBACK: &str = "🤔 I didn't quite catch that, but I'm here to help! Try asking me about:\n\n\
🎓 **Academics:** Admissions, departments, courses\n\
💼 **Career:** Placements, internships, industry connections\n\
🏠 **Campus Life:** Hostels, events, facilities\n\
📚 **Resources:** Library, labs, research opportunities\n\
📞 **Contact:** Getting in touch with the college\n\n\
What would you like to explore first?";

pub const APOLOGY: &str = "Oops! 😅 I encountered a technical hiccup. Please try asking your question again - I'm here and ready to help!";
