use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Configured fact verbatim when the capital has one, otherwise a generated
/// placeholder. Total: every capital gets a sentence.
pub fn fun_fact(capital: &str) -> String {
    match FUN_FACTS.get(capital) {
        Some(fact) => (*fact).to_string(),
        None => format!("{} is an interesting place to visit!", capital),
    }
}

pub fn has_fun_fact(capital: &str) -> bool {
    FUN_FACTS.contains_key(capital)
}

// Curated for a handful of capitals only; the rest fall back to the placeholder.
static FUN_FACTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Sacramento",
            "Sacramento started as a Gold Rush town and has a historic riverfront.",
        ),
        (
            "New Delhi",
            "New Delhi is home to India Gate and the grand Rashtrapati Bhavan.",
        ),
        (
            "London",
            "London has the famous River Thames and a long history back to Roman times.",
        ),
        (
            "Bengaluru",
            "Bengaluru is known as India’s tech hub — Silicon Valley of India.",
        ),
        (
            "Albany",
            "Albany is one of the oldest surviving settlements of the original British thirteen colonies.",
        ),
        (
            "Edinburgh",
            "Edinburgh has a castle on a volcanic rock — great for imagining knights!",
        ),
        (
            "Austin",
            "Austin is famous for music and live concerts — 'Keep Austin Weird' is its motto.",
        ),
        (
            "Chennai",
            "Chennai has beautiful temples and a long coastline on the Bay of Bengal.",
        ),
        (
            "Mumbai",
            "Mumbai is India's largest city and home to Bollywood films.",
        ),
    ])
});
