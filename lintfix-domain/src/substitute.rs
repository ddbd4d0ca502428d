/// Substitutes the target directory into a command template.
///
/// Replaces every `${directory}` token, and every quoted literal `"src/"`
/// (quotes preserved) for templates written against the hardcoded default
/// directory. Commands without either token pass through unchanged.
pub fn substitute_directory(command: &str, directory: &str) -> String {
    command
        .replace("${directory}", directory)
        .replace("\"src/\"", &format!("\"{}\"", directory))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_directory_placeholder() {
        let result = substitute_directory("npx eslint ${directory} --ext .ts", "lib/");
        assert_eq!(result, "npx eslint lib/ --ext .ts");
    }

    #[test]
    fn replaces_quoted_default_directory() {
        let result = substitute_directory("npx eslint \"src/\" --ext .ts", "lib/");
        assert_eq!(result, "npx eslint \"lib/\" --ext .ts");
    }

    #[test]
    fn leaves_commands_without_placeholders_unchanged() {
        let result = substitute_directory("npx tsc --noEmit", "src/");
        assert_eq!(result, "npx tsc --noEmit");
    }

    #[test]
    fn replaces_every_occurrence() {
        let result = substitute_directory("cp -r ${directory} ${directory}.bak", "lib/");
        assert_eq!(result, "cp -r lib/ lib/.bak");
    }
}
