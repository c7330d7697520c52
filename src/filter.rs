//! Fixed-list content gate for user-chosen identifiers.
//!
//! Every term is matched as a whole word, case-insensitively. Each term also
//! gets exactly one substituted spelling (see [`substitute`]); no other
//! obfuscations are detected.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter counts as a word break.
//! So "nu" matches inside "nuñez", and a term that starts or ends with an
//! accented letter ("êxtase", "loló") never matches on that side.

use regex::Regex;
use log::{debug, trace};

/// Single-character swaps applied to a whole term in one pass
const SUBSTITUTIONS: [(char, char); 6] = [
  ('a', '@'),
  ('e', '3'),
  ('i', '1'),
  ('o', '0'),
  ('s', '$'),
  ('t', '7'),
];

/// Compiled, immutable rule set
#[derive(Debug)]
pub struct ContentGate
{   rules: Vec<Regex>
}

impl ContentGate
{   /// Compile the built-in term list
    pub fn new() -> Result<Self, crate::error::Error>
    {   Self::with_terms(DISALLOWED_TERMS.iter().copied())
    }

    /// Compile a custom term list
    pub fn with_terms<'a, I>(terms: I)
      -> Result<Self, crate::error::Error>
    where I: IntoIterator<Item = &'a str>
    {   let mut rules = Vec::new();
        for term in terms
        {   rules.push(compile_rule(term)?);
            let substituted = substitute(term);
            if substituted != term
            {   rules.push(compile_rule(&substituted)?);
            }
        }
        debug!("Compiled content gate with {} rules", rules.len());
        Ok(ContentGate { rules })
    }

    pub fn rule_count(&self) -> usize
    {   self.rules.len()
    }

    /// True if any rule matches the trimmed, lower-cased text
    pub fn contains_violation(&self, text: &str) -> bool
    {   let normalized = text.trim().to_lowercase();
        let hit = self.rules
          .iter()
          .find(|rule| rule.is_match(&normalized));
        if let Some(rule) = hit
        {   trace!("Content gate hit on rule {}", rule.as_str());
            return true;
        }
        false
    }
}

/// The one deterministic substituted spelling of a term
pub fn substitute(term: &str) -> String
{   term.chars()
      .map(|c| {
        SUBSTITUTIONS
          .iter()
          .find(|(from, _)| *from == c)
          .map(|(_, to)| *to)
          .unwrap_or(c)
      })
      .collect()
}

fn compile_rule(term: &str) -> Result<Regex, crate::error::Error>
{   let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(term));
    Regex::new(&pattern).map_err(|e| {
      crate::error::Error::InvalidConfiguration(
        format!("bad content rule {:?}: {}", term, e)
      )
    })
}

/// Canonical disallowed terms (EN and PT-BR)
pub const DISALLOWED_TERMS: &[&str] = &[
  // profanity
  "fuck", "shit", "damn", "bitch", "asshole", "bastard", "crap",
  "piss", "dickhead", "jackass", "dumbass", "bullshit",
  "motherfucker", "cocksucker", "son of a bitch", "piece of shit",
  // sexual
  "porn", "sex", "naked", "nude", "xxx", "adult", "escort",
  // racist
  "nigger", "nigga", "negro", "spic", "wetback", "chink", "gook",
  "kike", "hymie", "raghead", "towelhead", "sand nigger",
  "cracker", "honky", "whitey", "gringo", "beaner", "border hopper",
  // homophobic
  "faggot", "fag", "dyke", "homo", "queer", "tranny",
  // religious
  "christ killer", "jihad", "terrorist",
  // ableist
  "retard", "retarded", "spastic", "cripple", "invalid",
  // offensive
  "nazi", "hitler", "genocide", "kill yourself", "kys",
  "suicide", "die", "death", "murder", "rape",
  // hate
  "hate", "supremacy", "master race", "inferior race",
  "pure blood", "ethnic cleansing",
  // drugs
  "cocaine", "heroin", "meth", "crack", "weed", "marijuana",
  "drugs", "dealer", "pusher",
  // violence
  "violence", "beating", "assault", "abuse", "torture",
  "bomb", "explosion", "attack",
  // spam
  "advertisement", "promotion", "scam", "phishing",
  // spelling variants
  "fuk", "shyt", "btch", "azz", "phuck", "biatch",
  "n1gger", "n1gga", "f4ggot", "f4g", "sh1t", "fck",
  // pt-br profanity
  "porra", "caralho", "merda", "bosta", "droga",
  "puta", "puto", "putaria", "fdp", "filho da puta",
  "desgraça", "desgraçado", "inferno", "maldito",
  "cacete", "vtnc", "vtmnc", "vsf", "pqp",
  // pt-br sexual
  "sexo", "pornô", "porno", "nua", "nu", "nudes",
  "prostituta", "prostituto", "prostituição", "programa",
  "buceta", "xoxota", "xana", "peitos", "mamas",
  "pau", "rola", "pica", "boquete", "gozo", "gozar",
  // pt-br homophobic
  "viado", "veado", "bicha", "sapatão", "traveco", "travec0",
  // pt-br racist
  "macaco", "neguinho", "criolo", "índio preguiçoso",
  // pt-br xenophobic
  "argentino imundo", "boliviano sujo",
  // pt-br religious
  "pastor safado", "crente fanático",
  // pt-br ableist
  "mongoloide", "aleijado", "retardado", "debil mental",
  // pt-br violence
  "se mata", "se mate", "morre", "morrer", "assassinato",
  "estupro", "estuprar", "suicídio", "suicidar", "matar",
  // pt-br drugs
  "maconha", "cannabis", "beck", "baseado", "cocaína",
  "heroína", "êxtase", "lança", "loló",
  // pt-br hate
  "raça inferior", "raça superior", "sangue puro",
  // pt-br spam
  "anúncio", "propaganda", "golpe", "fraude",
  // pt-br variants
  "f0da", "foda", "fodido", "fodida", "fuder", "fudido",
  "c@ralho", "p0rra", "p0ta", "p4u", "r0la", "cuzão",
  "arrombado", "otario", "otário", "idiota", "imbecil",
  "burro", "animal", "anta",
  "m3rda", "c4ralho", "d3sgraca", "f1lho da puta",
];
