use crate::patch::matcher::find_all;
use crate::patch::replacer::apply;
use crate::pattern::{ValidationError, parse, validate};
use std::fmt;

/// What happened to one find/replace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternResult {
	/// The find pattern matched `count` times and the replacement was applied.
	Replaced { count: usize },

	/// The find pattern did not match anywhere in the buffer.
	NotFound,

	/// The pair was rejected before matching.
	Invalid { reason: ValidationError },
}

impl PatternResult {
	/// Rejected pairs are warnings; everything else is routine.
	pub fn log_level(&self) -> log::Level {
		match self {
			PatternResult::Invalid { .. } => log::Level::Warn,
			PatternResult::Replaced { .. } | PatternResult::NotFound => log::Level::Info,
		}
	}
}

/// A pair as the caller supplied it, along with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternReport {
	pub find: String,
	pub replace: String,
	pub result: PatternResult,
}

impl fmt::Display for PatternReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.result {
			PatternResult::Replaced { count } => {
				write!(f, "Replaced {} instances of {}", count, self.find)
			}
			PatternResult::NotFound => write!(f, "Pattern not found: {}", self.find),
			PatternResult::Invalid { reason } => {
				write!(f, "Invalid pattern {}:{}: {}", self.find, self.replace, reason)
			}
		}
	}
}

/// The result of running a set of pairs over a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOutcome {
	/// Whether any byte of the buffer changed.
	pub modified: bool,

	/// One report per pair, in the order the pairs were given.
	pub reports: Vec<PatternReport>,
}

impl PatchOutcome {
	/// Total number of matches replaced across all pairs.
	pub fn replaced_count(&self) -> usize {
		self.reports
			.iter()
			.map(|report| match report.result {
				PatternResult::Replaced { count } => count,
				_ => 0,
			})
			.sum()
	}

	pub fn has_invalid(&self) -> bool {
		self.reports
			.iter()
			.any(|report| matches!(report.result, PatternResult::Invalid { .. }))
	}
}

/// Apply each find/replace pair to `buffer`, in order.
///
/// Pairs run against the buffer as left by the pairs before them. A pair that
/// fails to parse or validate is reported and skipped; it never stops the run.
pub fn run<I, F, R>(buffer: &mut [u8], pairs: I) -> PatchOutcome
where
	I: IntoIterator<Item = (F, R)>,
	F: AsRef<str>,
	R: AsRef<str>,
{
	let mut outcome = PatchOutcome::default();

	for (find_raw, replace_raw) in pairs {
		let find_raw = find_raw.as_ref();
		let replace_raw = replace_raw.as_ref();
		let result = run_pair(buffer, find_raw, replace_raw, &mut outcome.modified);

		let report = PatternReport {
			find: find_raw.to_string(),
			replace: replace_raw.to_string(),
			result,
		};
		log::log!(report.result.log_level(), "{report}");
		outcome.reports.push(report);
	}

	outcome
}

fn run_pair(
	buffer: &mut [u8],
	find_raw: &str,
	replace_raw: &str,
	modified: &mut bool,
) -> PatternResult {
	let (find, replace) = match validate(parse(find_raw), parse(replace_raw)) {
		Ok(pair) => pair,
		Err(reason) => return PatternResult::Invalid { reason },
	};

	let offsets = find_all(buffer, &find);
	if offsets.is_empty() {
		return PatternResult::NotFound;
	}
	log::debug!("{find} matched at offsets {offsets:x?}");

	*modified |= apply(buffer, &find, &replace, &offsets);

	PatternResult::Replaced {
		count: offsets.len(),
	}
}
