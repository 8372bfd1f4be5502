use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

/// Placeholder the downstream system expands from its environment.
fn env_ref(name: &str) -> String {
    format!("${{{}}}", name)
}

/// One template source registered with the engine.
pub struct TemplateSource<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

pub fn build_template_environment<'a>(
    sources: &[TemplateSource<'a>],
) -> Result<Environment<'a>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_function("env_ref", env_ref);

    for source in sources {
        env.add_template(source.name, source.content).map_err(|e| AppError::Template {
            name: source.name.to_string(),
            details: e.to_string(),
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::Template {
        name: template_name.to_string(),
        details: e.to_string(),
    })?;

    template
        .render(ctx)
        .map_err(|e| AppError::Template { name: template_name.to_string(), details: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn env_ref_emits_shell_substitution() {
        let sources = [TemplateSource { name: "t.yaml.j2", content: "key: \"{{ env_ref(\"API_KEY\") }}\"\n" }];
        let env = build_template_environment(&sources).unwrap();

        let out = render_template_by_name(&env, "t.yaml.j2", &context! {}).unwrap();

        assert_eq!(out, "key: \"${API_KEY}\"\n");
    }

    #[test]
    fn values_are_not_escaped() {
        let sources = [TemplateSource { name: "t.yaml", content: "{{ value }}" }];
        let env = build_template_environment(&sources).unwrap();

        let out = render_template_by_name(&env, "t.yaml", &context! { value => "a \"quoted\" <b>" })
            .unwrap();

        assert_eq!(out, "a \"quoted\" <b>");
    }

    #[test]
    fn unknown_template_is_an_error() {
        let env = build_template_environment(&[]).unwrap();
        let err = render_template_by_name(&env, "missing", &context! {}).unwrap_err();
        assert!(matches!(err, AppError::Template { .. }));
    }
}
