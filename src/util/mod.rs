//! Various utility functions.

pub mod point;
pub mod regexes;

/// Combines two arrays of equal length element-wise.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let mut right = right.into_iter();
  left.map(|x| {
    // unwrap: Both arrays have length C.
    f(x, right.next().unwrap())
  })
}

/// The character immediately before byte offset `index` in `input`,
/// if any. `index` must be a char boundary.
pub fn char_before(input: &str, index: usize) -> Option<char> {
  input[..index].chars().next_back()
}

/// The character starting at byte offset `index` in `input`, if any.
/// `index` must be a char boundary.
pub fn char_at(input: &str, index: usize) -> Option<char> {
  input[index..].chars().next()
}

/// Sorts strings by descending length (in characters), keeping the
/// relative order of strings of equal length.
pub fn longest_first<S: AsRef<str>>(strings: &[S]) -> Vec<&str> {
  let mut sorted: Vec<&str> = strings.iter().map(AsRef::as_ref).collect();
  sorted.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
  sorted
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zip_with() {
    assert_eq!(zip_with([1, 2, 3], [10, 20, 30], |a, b| a + b), [11, 22, 33]);
  }

  #[test]
  fn test_char_neighbors() {
    let s = "µg m";
    assert_eq!(char_before(s, 0), None);
    assert_eq!(char_before(s, 2), Some('µ'));
    assert_eq!(char_at(s, 2), Some('g'));
    assert_eq!(char_at(s, s.len()), None);
  }

  #[test]
  fn test_longest_first_is_stable() {
    let strings = vec!["ab", "abcd", "cd", "x", "wxyz"];
    assert_eq!(longest_first(&strings), vec!["abcd", "wxyz", "ab", "cd", "x"]);
  }

  #[test]
  fn test_longest_first_counts_chars() {
    let strings = vec!["°C", "degC"];
    assert_eq!(longest_first(&strings), vec!["degC", "°C"]);
  }
}
