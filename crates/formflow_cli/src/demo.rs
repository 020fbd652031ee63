//! Demo page: a landing greeting plus an age calculator.

use formflow_core::{
    inputs, Activity, EngineResult, Fields, InputDeclarations, LandingActivity, RenderError,
    RenderParams, Renderer, View,
};
use std::sync::Arc;

/// Renders the template id and its parameters as one JSON object.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, template_id: &str, params: &RenderParams) -> Result<String, RenderError> {
        let document = serde_json::json!({
            "template": template_id,
            "params": params,
        });
        serde_json::to_string_pretty(&document)
            .map_err(|err| RenderError::new(template_id, err.to_string()))
    }
}

pub struct Greeting {
    renderer: Arc<dyn Renderer>,
}

impl LandingActivity for Greeting {
    fn name(&self) -> &str {
        "greeting"
    }

    fn inner_buttons(&self) -> &[&str] {
        &["welcome"]
    }

    fn inner_inputs(&self) -> InputDeclarations {
        inputs([("name", "noempty")])
    }

    fn render(&self, fields: &Fields<'_>) -> EngineResult<String> {
        let mut params = RenderParams::new();
        params.insert("name", "Enter your name...");
        if fields.any_inner_button_pressed() {
            if fields.is_validated("name")? {
                params.insert("name", fields.get_validated("name")?.to_string());
            } else {
                params.insert("error", "Name must not be empty!");
            }
        }
        Ok(self.renderer.render("view_a", &params)?)
    }

    fn process(&mut self, _fields: &Fields<'_>) -> EngineResult<()> {
        Ok(())
    }
}

pub struct AgeCalculator {
    renderer: Arc<dyn Renderer>,
}

impl Activity for AgeCalculator {
    fn name(&self) -> &str {
        "age_calculator"
    }

    fn trigger_button(&self) -> Option<&str> {
        Some("age")
    }

    fn inner_buttons(&self) -> &[&str] {
        &["calc_age"]
    }

    fn initial_inputs(&self) -> InputDeclarations {
        inputs([("name", "?string")])
    }

    fn inner_inputs(&self) -> InputDeclarations {
        inputs([("which_age", "int")])
    }

    fn render(&self, fields: &Fields<'_>) -> EngineResult<String> {
        let mut params = RenderParams::new();
        if fields.is_received("calc_age") {
            if fields.is_validated("which_age")? {
                let age = fields.get_validated("which_age")?;
                params.insert("age", format!("Happy {age}th!"));
            } else {
                params.insert("age", "Enter correct age!");
            }
        }
        if fields.is_first_render() {
            let mut greeter = RenderParams::new();
            greeter.insert("text", format!("Hello {}", fields.get_received_or("name", "")));
            params.nest("greeter", greeter);
        }
        Ok(self.renderer.render("view_b", &params)?)
    }

    fn process(&mut self, _fields: &Fields<'_>) -> EngineResult<()> {
        Ok(())
    }
}

/// Registers the demo activities on `view`.
pub fn register(view: &mut View, renderer: Arc<dyn Renderer>) -> EngineResult<()> {
    view.add_activity(Greeting {
        renderer: Arc::clone(&renderer),
    })?
    .add_activity(AgeCalculator { renderer })?;
    Ok(())
}
