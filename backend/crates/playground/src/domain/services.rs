//! Domain Services
//!
//! Pure domain logic: the starter-template lookup and the ownership rule.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entities::Project;
use crate::domain::value_objects::Language;
use crate::error::PlaygroundError;

/// Fallback starter code for unrecognized language tags
pub const UNSUPPORTED_LANGUAGE: &str = "Language not supported";

/// Starter code for a new project, by language tag
///
/// Matching is case-insensitive. Unknown tags fall back to the
/// [`UNSUPPORTED_LANGUAGE`] sentinel; this is never an error.
pub fn starter_code(language: &Language) -> &'static str {
    match language.canonical().as_str() {
        "python" => r#"print("Hello World")"#,
        "java" => {
            "public class Main { public static void main(String[] args) { System.out.println(\"Hello World\"); } }"
        }
        "javascript" => r#"console.log("Hello World");"#,
        "cpp" => {
            "#include <iostream>\n\nint main() {\n    std::cout << \"Hello World\" << std::endl;\n    return 0;\n}"
        }
        "c" => "#include <stdio.h>\n\nint main() {\n    printf(\"Hello World\\n\");\n    return 0;\n}",
        "go" => {
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello World\")\n}"
        }
        "bash" => r#"echo "Hello World""#,
        _ => UNSUPPORTED_LANGUAGE,
    }
}

/// Enforce the ownership rule shared by every single-resource operation
///
/// A project may only be read, mutated, or deleted by the user that
/// created it.
pub fn ensure_owner(project: &Project, user_id: &UserId) -> Result<(), PlaygroundError> {
    if project.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(PlaygroundError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_code_known_languages() {
        assert_eq!(
            starter_code(&Language::new("python")),
            "print(\"Hello World\")"
        );
        assert_eq!(
            starter_code(&Language::new("javascript")),
            "console.log(\"Hello World\");"
        );
        assert_eq!(starter_code(&Language::new("bash")), "echo \"Hello World\"");
        assert!(starter_code(&Language::new("java")).contains("public class Main"));
        assert!(starter_code(&Language::new("cpp")).contains("std::cout"));
        assert!(starter_code(&Language::new("c")).contains("printf"));
        assert!(starter_code(&Language::new("go")).contains("fmt.Println"));
    }

    #[test]
    fn test_starter_code_case_insensitive() {
        assert_eq!(
            starter_code(&Language::new("Python")),
            starter_code(&Language::new("python"))
        );
        assert_eq!(
            starter_code(&Language::new("JAVASCRIPT")),
            starter_code(&Language::new("javascript"))
        );
    }

    #[test]
    fn test_starter_code_unknown_language() {
        assert_eq!(starter_code(&Language::new("cobol")), UNSUPPORTED_LANGUAGE);
        assert_eq!(starter_code(&Language::new("")), UNSUPPORTED_LANGUAGE);
    }

    #[test]
    fn test_ensure_owner() {
        let owner = UserId::new();
        let project = Project::new(
            "demo".to_string(),
            Language::new("python"),
            "code".to_string(),
            "1".to_string(),
            owner,
        );

        assert!(ensure_owner(&project, &owner).is_ok());
        assert!(matches!(
            ensure_owner(&project, &UserId::new()),
            Err(PlaygroundError::Forbidden)
        ));
    }
}
