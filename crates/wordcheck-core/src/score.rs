/// Scrabble letter value; characters off the board score nothing
fn letter_value(c: char) -> u32 {
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' | 'l' | 'n' | 's' | 't' | 'r' => 1,
        'd' | 'g' => 2,
        'b' | 'c' | 'm' | 'p' => 3,
        'f' | 'h' | 'v' | 'w' | 'y' => 4,
        'k' => 5,
        'j' | 'x' => 8,
        'q' | 'z' => 10,
        _ => 0,
    }
}

/// Sum of letter values over the lowercased word
pub fn score(word: &str) -> u32 {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(letter_value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scores() {
        assert_eq!(score("quiz"), 22);
        assert_eq!(score("cat"), 5);
        assert_eq!(score("jukebox"), 27);
    }

    #[test]
    fn test_case_and_unknown_characters() {
        assert_eq!(score(""), 0);
        assert_eq!(score("A1"), 1);
        assert_eq!(score("QUIZ"), score("quiz"));
        assert_eq!(score("?!é"), 0);
    }
}
