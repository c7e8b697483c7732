//! Stdin command parsing for headless mode
//!
//! Lines starting with `/` are commands; any other non-empty line is sent to
//! the assistant as a chat message.

use std::sync::LazyLock;

use regex::Regex;

use neethi_app::Message;
use neethi_core::prelude::*;
use neethi_core::{parse_income, CaseType, EligibilityForm, IndianState, LawyerId};

static COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/([a-z_]+)(?:\s+(.*))?$").expect("Invalid command pattern regex")
});

pub const USAGE: &str = "/case <CNR> | /lawyers | /connect <ID> | /stats | \
/eligibility <income> <case_type> <state> [woman sc_st senior disabled custody] | /quit";

/// Translate one stdin line into the messages it stands for
pub fn parse(line: &str) -> Result<Vec<Message>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let Some(caps) = COMMAND_PATTERN.captures(line) else {
        if line.starts_with('/') {
            return Err(Error::invalid_command(format!("{} (try {})", line, USAGE)));
        }
        return Ok(vec![Message::SendChat(line.to_string())]);
    };

    let name = &caps[1];
    let args = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

    match (name, args) {
        ("case", cnr) if !cnr.is_empty() => Ok(vec![
            Message::SetCnr(cnr.to_string()),
            Message::SearchCase,
        ]),
        ("lawyers", "") => Ok(vec![Message::LoadLawyers]),
        ("connect", id) if !id.is_empty() => {
            Ok(vec![Message::ConnectLawyer(LawyerId::from(id))])
        }
        ("stats", "") => Ok(vec![Message::LoadStats]),
        ("eligibility", args) => {
            let form = parse_eligibility(args)?;
            Ok(vec![
                Message::SetEligibilityForm(form),
                Message::SubmitEligibility,
            ])
        }
        ("quit", "") => Ok(vec![Message::Quit]),
        _ => Err(Error::invalid_command(format!("/{} (try {})", name, USAGE))),
    }
}

fn parse_eligibility(args: &str) -> Result<EligibilityForm> {
    let mut words = args.split_whitespace();
    let (Some(income), Some(case_type), Some(state)) = (words.next(), words.next(), words.next())
    else {
        return Err(Error::invalid_command(
            "usage: /eligibility <income> <case_type> <state> [flags]",
        ));
    };

    let case_type = CaseType::parse(case_type)
        .ok_or_else(|| Error::invalid_command(format!("unknown case type '{}'", case_type)))?;
    let state = IndianState::parse(state)
        .ok_or_else(|| Error::invalid_command(format!("unknown state '{}'", state)))?;

    let mut form = EligibilityForm {
        annual_income: parse_income(income),
        case_type,
        state,
        ..Default::default()
    };

    for flag in words {
        match flag.to_lowercase().as_str() {
            "woman" => form.is_woman = true,
            "sc_st" | "sc/st" => form.is_sc_st = true,
            "senior" => form.is_senior_citizen = true,
            "disabled" | "specially_abled" => form.is_specially_abled = true,
            "custody" => form.is_in_custody = true,
            other => {
                return Err(Error::invalid_command(format!("unknown flag '{}'", other)));
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neethi_core::case_status::DEMO_CNR;

    #[test]
    fn test_plain_text_is_chat() {
        let msgs = parse("  What is Tele-Law?  ").unwrap();
        assert!(matches!(&msgs[..], [Message::SendChat(t)] if t == "What is Tele-Law?"));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_case_command() {
        let msgs = parse(&format!("/case {}", DEMO_CNR)).unwrap();
        assert!(matches!(&msgs[..], [Message::SetCnr(c), Message::SearchCase] if c == DEMO_CNR));
    }

    #[test]
    fn test_case_without_cnr_is_rejected() {
        assert!(parse("/case").is_err());
    }

    #[test]
    fn test_connect_accepts_text_and_numeric_ids() {
        let msgs = parse("/connect LAW001").unwrap();
        assert!(
            matches!(&msgs[..], [Message::ConnectLawyer(LawyerId::Text(id))] if id == "LAW001")
        );

        let msgs = parse("/connect 7").unwrap();
        assert!(matches!(&msgs[..], [Message::ConnectLawyer(LawyerId::Number(7))]));
    }

    #[test]
    fn test_simple_commands() {
        assert!(matches!(&parse("/lawyers").unwrap()[..], [Message::LoadLawyers]));
        assert!(matches!(&parse("/stats").unwrap()[..], [Message::LoadStats]));
        assert!(matches!(&parse("/quit").unwrap()[..], [Message::Quit]));
    }

    #[test]
    fn test_eligibility_command() {
        let msgs = parse("/eligibility 250000 criminal tamil_nadu woman custody").unwrap();
        let [Message::SetEligibilityForm(form), Message::SubmitEligibility] = &msgs[..] else {
            panic!("unexpected messages: {:?}", msgs);
        };
        assert_eq!(form.annual_income, 250_000);
        assert_eq!(form.case_type, CaseType::Criminal);
        assert_eq!(form.state, IndianState::TamilNadu);
        assert!(form.is_woman);
        assert!(form.is_in_custody);
        assert!(!form.is_senior_citizen);
    }

    #[test]
    fn test_eligibility_negative_income_becomes_zero() {
        let msgs = parse("/eligibility -5 civil delhi").unwrap();
        let [Message::SetEligibilityForm(form), _] = &msgs[..] else {
            panic!("unexpected messages: {:?}", msgs);
        };
        assert_eq!(form.annual_income, 0);
    }

    #[test]
    fn test_eligibility_errors() {
        assert!(parse("/eligibility 1000 civil").is_err());
        assert!(parse("/eligibility 1000 tax delhi").is_err());
        assert!(parse("/eligibility 1000 civil atlantis").is_err());
        assert!(parse("/eligibility 1000 civil delhi rich").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("/reload").unwrap_err();
        assert!(err.to_string().contains("/reload"));
        assert!(parse("/Case X").is_err());
    }
}
