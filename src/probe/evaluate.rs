//! Response evaluation.

use std::fmt;

use crate::probe::types::{Expectation, Observation};

/// A response field watched by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Status,
    Server,
    ContentType,
    UserAgent,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Status => "status code",
            Field::Server => "server header",
            Field::ContentType => "content-type header",
            Field::UserAgent => "user-agent header",
        };
        f.write_str(name)
    }
}

/// One field where the live response differed from the expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: Field,
    pub expected: String,
    pub observed: String,
}

/// Compare one observation against the expectation.
///
/// Exact equality per field: integer equality for the status code,
/// case-sensitive string equality for the three headers. An empty
/// expected value matches only an absent or blank header. Pure and
/// stateless; mismatches are observations, never errors.
pub fn evaluate(expected: &Expectation, observed: &Observation) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    if observed.status != expected.status {
        mismatches.push(Mismatch {
            field: Field::Status,
            expected: expected.status.to_string(),
            observed: observed.status.to_string(),
        });
    }

    let headers = [
        (Field::Server, &expected.server, &observed.server),
        (
            Field::ContentType,
            &expected.content_type,
            &observed.content_type,
        ),
        (Field::UserAgent, &expected.user_agent, &observed.user_agent),
    ];

    for (field, want, got) in headers {
        if got != want {
            mismatches.push(Mismatch {
                field,
                expected: want.clone(),
                observed: got.clone(),
            });
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn expectation(status: u16, server: &str, content_type: &str, user_agent: &str) -> Expectation {
        Expectation {
            url: "http://localhost/".to_string(),
            status,
            server: server.to_string(),
            content_type: content_type.to_string(),
            user_agent: user_agent.to_string(),
            tick: Duration::from_secs(60),
        }
    }

    fn observation(status: u16, server: &str, content_type: &str, user_agent: &str) -> Observation {
        Observation {
            status,
            server: server.to_string(),
            content_type: content_type.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    #[test]
    fn matching_response_yields_no_mismatches() {
        let expected = expectation(200, "nginx", "text/html", "");
        let observed = observation(200, "nginx", "text/html", "");

        assert!(evaluate(&expected, &observed).is_empty());
    }

    #[test]
    fn status_difference_yields_one_mismatch() {
        let expected = expectation(200, "nginx", "text/html", "");
        let observed = observation(404, "nginx", "text/html", "");

        let mismatches = evaluate(&expected, &observed);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, Field::Status);
        assert_eq!(mismatches[0].observed, "404");
        assert_eq!(mismatches[0].expected, "200");
    }

    #[test]
    fn absent_header_mismatches_non_empty_expectation() {
        let expected = expectation(200, "Apache", "", "");
        let observed = observation(200, "", "", "");

        let mismatches = evaluate(&expected, &observed);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, Field::Server);
        assert_eq!(mismatches[0].observed, "");
    }

    #[test]
    fn present_header_mismatches_empty_expectation() {
        let expected = expectation(200, "", "", "");
        let observed = observation(200, "nginx", "", "");

        let mismatches = evaluate(&expected, &observed);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, Field::Server);
        assert_eq!(mismatches[0].observed, "nginx");
    }

    #[test]
    fn header_comparison_is_case_sensitive() {
        let expected = expectation(200, "nginx", "", "");
        let observed = observation(200, "Nginx", "", "");

        let mismatches = evaluate(&expected, &observed);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, Field::Server);
    }

    #[test]
    fn every_differing_field_is_reported() {
        let expected = expectation(200, "nginx", "text/html", "probe");
        let observed = observation(500, "Apache", "application/json", "");

        let mismatches = evaluate(&expected, &observed);

        assert_eq!(mismatches.len(), 4);
        let fields: Vec<Field> = mismatches.iter().map(|m| m.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Status,
                Field::Server,
                Field::ContentType,
                Field::UserAgent
            ]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let expected = expectation(200, "nginx", "text/html", "");
        let observed = observation(404, "", "text/plain", "curl/8.0");

        let first = evaluate(&expected, &observed);
        let second = evaluate(&expected, &observed);

        assert_eq!(first, second);
    }
}
