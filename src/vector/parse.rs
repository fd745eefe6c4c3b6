//! Best-effort scanning of free-form text into vector elements.
//!
//! Every maximal run of ASCII digits becomes one element, in order of appearance. All other
//! characters, including `-` and `.`, are separators and are dropped. The scan never fails:
//! a run whose value does not fit the element type ends it, keeping what was read so far.

use crate::core::traits::Element;

/// Scan `text` left to right, collecting each digit run as an unsigned decimal value.
pub(crate) fn scan_digit_runs<T: Element>(text: &str) -> Vec<T> {
    let bytes = text.as_bytes();
    let mut elements = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // digits are ASCII, so both ends lie on char boundaries
        let run = &text[start..i];
        match T::from_str_radix(run, 10) {
            Ok(value) => elements.push(value),
            Err(_) => {
                log::trace!("digit run {run:?} does not fit the element type, stopping scan");
                break;
            }
        }
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_signs_are_dropped() {
        assert_eq!(scan_digit_runs::<i32>("1,2,3"), vec![1, 2, 3]);
        assert_eq!(scan_digit_runs::<i32>("a-1b--2"), vec![1, 2]);
        assert_eq!(scan_digit_runs::<i32>("3.14"), vec![3, 14]);
        assert_eq!(scan_digit_runs::<i32>("  007 x42"), vec![7, 42]);
    }

    #[test]
    fn empty_and_digitless_input() {
        assert!(scan_digit_runs::<i64>("").is_empty());
        assert!(scan_digit_runs::<i64>("no digits here, -.").is_empty());
    }

    #[test]
    fn non_ascii_text_is_skipped() {
        assert_eq!(scan_digit_runs::<u32>("ä1→22ü"), vec![1, 22]);
    }

    #[test]
    fn overflowing_run_stops_scan() {
        assert_eq!(scan_digit_runs::<u8>("12 300 4"), vec![12]);
    }

    #[test]
    fn float_elements() {
        assert_eq!(scan_digit_runs::<f64>("[ 1, 25 ]"), vec![1.0, 25.0]);
    }
}
