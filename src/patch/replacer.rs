use crate::pattern::Pattern;

/// Write `replace` over `buffer` at each of `offsets`.
///
/// A position is written only when both the find and replace slots there are
/// concrete bytes; a wildcard on either side leaves the buffer byte alone.
/// Offsets are applied in the order given, so overlapping matches see the
/// bytes written for earlier offsets. An offset whose window runs past the end
/// of the buffer is skipped.
///
/// `find` and `replace` must be the same length, as [`validate`] guarantees.
/// A mismatched pair writes nothing.
///
/// Returns true if any byte in the buffer changed value.
///
/// [`validate`]: crate::pattern::validate
pub fn apply(buffer: &mut [u8], find: &Pattern, replace: &Pattern, offsets: &[usize]) -> bool {
	if find.len() != replace.len() {
		log::warn!(
			"Refusing to apply {} bytes of replacement over a {} byte pattern",
			replace.len(),
			find.len()
		);
		return false;
	}

	let mut modified = false;

	for &offset in offsets {
		let Some(window) = offset
			.checked_add(find.len())
			.and_then(|end| buffer.get_mut(offset..end))
		else {
			log::warn!("Skipping out-of-range match at offset {offset:#x}");
			continue;
		};

		for ((byte, find_slot), replace_slot) in
			window.iter_mut().zip(find.slots()).zip(replace.slots())
		{
			if find_slot.is_wildcard() {
				continue;
			}
			if let Some(value) = replace_slot.value()
				&& *byte != value
			{
				*byte = value;
				modified = true;
			}
		}
	}

	modified
}
