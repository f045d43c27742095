// Two-pass scanner
//
// Pass 1 (`candidates`) looks at the first two letters of every letter run and
// keeps only the runs that could start a dictionary entry. Pass 2 (`bounds`)
// walks forward from each surviving start, skipping punctuation, to find the
// exact span of the match. `redact` then decides per span whether to mask it
// and assembles the output.

pub mod bounds;
pub mod candidates;
pub mod redact;

pub use bounds::find_word_bounds;
pub use candidates::find_candidate_starts;
pub use redact::redact;
