//! Domain logic for client-side input handling.
//!
//! This module contains pure functions that implement the input policy
//! without side effects, making them easy to test.

/// What the input loop should do with one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing to send; keep looping.
    Skip,
    /// Close the connection and leave the loop.
    Exit,
    /// Forward the command to the server.
    Send(String),
}

/// Classify one raw line of terminal input.
///
/// The line is trimmed of surrounding whitespace first. An empty result
/// is skipped without a network round-trip. A trimmed line starting with
/// "exit" (case-sensitive) shuts the client down and is never sent over
/// the network. Anything else is forwarded as a command.
///
/// # Arguments
///
/// * `line` - The raw line as read from the terminal
///
/// # Returns
///
/// The [`InputAction`] the loop should take for this line
pub fn classify_input(line: &str) -> InputAction {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return InputAction::Skip;
    }

    if trimmed.starts_with("exit") {
        return InputAction::Exit;
    }

    InputAction::Send(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_skipped() {
        // given:
        let line = "";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Skip);
    }

    #[test]
    fn test_whitespace_only_line_is_skipped() {
        // given:
        let line = "   \t  ";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Skip);
    }

    #[test]
    fn test_exit_triggers_shutdown() {
        // given:
        let line = "exit";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Exit);
    }

    #[test]
    fn test_exit_prefix_triggers_shutdown() {
        // given: "exit" matches as a prefix, not an exact string
        let line = "exit now";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Exit);
    }

    #[test]
    fn test_exit_match_is_case_sensitive() {
        // given:
        let line = "EXIT";

        // when:
        let action = classify_input(line);

        // then: an upper-case variant is an ordinary command
        assert_eq!(action, InputAction::Send("EXIT".to_string()));
    }

    #[test]
    fn test_exit_after_leading_whitespace_triggers_shutdown() {
        // given: trimming happens before the prefix match
        let line = "  exit  ";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Exit);
    }

    #[test]
    fn test_command_is_trimmed_and_forwarded() {
        // given:
        let line = "  get foo  ";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Send("get foo".to_string()));
    }

    #[test]
    fn test_command_containing_exit_is_forwarded() {
        // given: "exit" is only special as a prefix
        let line = "please exit";

        // when:
        let action = classify_input(line);

        // then:
        assert_eq!(action, InputAction::Send("please exit".to_string()));
    }
}
