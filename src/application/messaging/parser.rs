//! Message parser - Parses raw text into structured messages

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::{Content, Message, Sender};

/// A quoted argument, or a run of non-whitespace
static ARG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|(\S+)"#).expect("argument pattern is valid")
});

/// Parses text input (console, prefix commands) into Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: &str, sender: Option<Sender>) -> Message {
        let chat_id = chat_id.into();
        let text = text.trim();

        if text.is_empty() {
            return Message::new(chat_id, Content::Empty).with_sender_opt(sender);
        }

        match self.strip_prefix(text) {
            Some(cmd_text) => {
                let mut parts = split_args(cmd_text).into_iter();
                let name = parts.next().unwrap_or_default();
                Message::from_command(chat_id, name, parts.collect()).with_sender_opt(sender)
            }
            None => Message::from_text(chat_id, text).with_sender_opt(sender),
        }
    }

    fn strip_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.strip_prefix('/')
            .or_else(|| {
                if self.command_prefix.is_empty() {
                    None
                } else {
                    text.strip_prefix(self.command_prefix.as_str())
                }
            })
    }
}

/// Split on whitespace, keeping double-quoted arguments together
pub fn split_args(input: &str) -> Vec<String> {
    ARG_PATTERN
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slash_command() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("console", "/add_user guild-a https://roblox.com/users/1/profile", None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "add_user".to_string(),
                args: vec!["guild-a".to_string(), "https://roblox.com/users/1/profile".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_custom_prefix_and_quotes() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("console", r#"!remove_user "my guild" Alice"#, None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "remove_user".to_string(),
                args: vec!["my guild".to_string(), "Alice".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_plain_text_and_empty() {
        let parser = MessageParser::new("!");
        assert_eq!(parser.parse("c", "hello there", None).content, Content::Text("hello there".to_string()));
        assert_eq!(parser.parse("c", "   ", None).content, Content::Empty);
    }

    #[test]
    fn test_parse_keeps_sender() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("c", "/help", Some(Sender::new("op")));
        assert_eq!(msg.sender_name(), "op");
    }

    #[test]
    fn test_split_args_empty_quotes() {
        assert_eq!(split_args(r#"a "" b"#), vec!["a", "", "b"]);
    }
}
