//! Rule-based canned responses used when the remote answering service is
//! unavailable. The query is lowercased and scanned against an ordered rule
//! table; the first rule with a matching keyword wins, and anything else
//! falls through to a random greeting.

use rand::Rng;

mod templates;

use templates::{CALENDAR_GUIDE, GRADES_GUIDE, GREETINGS, REGISTRATION_GUIDE};

struct Rule {
  keywords: &'static [&'static str],
  response: &'static str,
}

/// Order matters: scanned top-to-bottom, first match wins.
const RULES: &[Rule] = &[
  Rule {
    keywords: &["register", "registration"],
    response: REGISTRATION_GUIDE,
  },
  Rule {
    keywords: &["gpa", "result", "grade"],
    response: GRADES_GUIDE,
  },
  Rule {
    keywords: &["calendar", "date", "deadline"],
    response: CALENDAR_GUIDE,
  },
];

/// Pick one of the generic greetings uniformly at random.
pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
  GREETINGS[rng.random_range(0..GREETINGS.len())]
}

/// Canned reply used when even the request body could not be understood.
#[must_use]
pub const fn default_greeting() -> &'static str {
  GREETINGS[0]
}

/// Select a canned response for the given user query. Matching is
/// case-insensitive on substrings, so "REGISTER" and "preregistration" both
/// hit the registration rule.
pub fn contextual_response<R: Rng + ?Sized>(query: &str, rng: &mut R) -> &'static str {
  let query = query.to_lowercase();

  for rule in RULES {
    if rule.keywords.iter().any(|kw| query.contains(kw)) {
      return rule.response;
    }
  }

  greeting(rng)
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
  }

  #[test]
  fn registration_keywords_route_to_registration_guide() {
    let reply = contextual_response("How do I REGISTER for courses?", &mut rng());
    assert!(reply.contains("course registration"));

    let reply = contextual_response("when does registration close", &mut rng());
    assert!(reply.contains("course registration"));
  }

  #[test]
  fn grade_keywords_route_to_grades_guide() {
    let reply = contextual_response("what is my gpa now", &mut rng());
    assert!(reply.contains("GPA Calculation"));

    let reply = contextual_response("Where can I see my Results?", &mut rng());
    assert!(reply.contains("GPA Calculation"));
  }

  #[test]
  fn calendar_keywords_route_to_calendar_guide() {
    let reply = contextual_response("is there a deadline for fees", &mut rng());
    assert!(reply.contains("Academic Calendar"));
  }

  #[test]
  fn first_matching_rule_wins() {
    // Mentions both registration and deadlines; registration is first.
    let reply = contextual_response("registration deadline?", &mut rng());
    assert!(reply.contains("course registration"));
  }

  #[test]
  fn unmatched_query_gets_a_greeting() {
    let reply = contextual_response("hello there", &mut rng());
    assert!(GREETINGS.contains(&reply));
  }

  #[test]
  fn greeting_is_deterministic_under_a_seeded_rng() {
    let a = greeting(&mut StdRng::seed_from_u64(42));
    let b = greeting(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
  }
}
