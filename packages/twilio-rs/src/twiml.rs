//! TwiML documents for voice calls.
//!
//! Only the verbs needed to speak a message are supported.

/// A `<Response>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verb {
    Say(String),
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `<Say>` verb. The text is escaped when rendered.
    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say(text.into()));
        self
    }

    /// Render the document without an XML declaration.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<Response>");
        for verb in &self.verbs {
            match verb {
                Verb::Say(text) => {
                    xml.push_str("<Say>");
                    xml.push_str(&escape_xml(text));
                    xml.push_str("</Say>");
                }
            }
        }
        xml.push_str("</Response>");
        xml
    }
}

/// Escape text for use inside an XML element or attribute.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
