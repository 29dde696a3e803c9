//! SwiftUI code generation
//!
//! Renders a standalone SwiftUI view that reproduces a preset's preview.
//! Rendering is plain substitution into a fixed template and never fails.

use crate::catalog::CurveId;
use crate::presets::{default_presented_text, AnimationPreset};

const TEMPLATE: &str = r#"import SwiftUI

struct ContentView: View {
    let animation: Animation = {{ANIMATION}}
    @State var isShowing = false
    @State var presentedText = "{{PRESENTED_TEXT}}"
    @State var isEditingPresentedText = false
    @State var isJustEditingPresentedText = false
    @FocusState var isEditingPresentedTextKeyboard
    @FocusState var isAdjustingSpeed
    @State var speed: Double? = {{SPEED}}

    var speedBinding: Binding<String> {
        Binding {
            if let speed = speed {
                return "\(speed)"
            } else {
                return ""
            }
        } set: { newValue in
            guard !newValue.isEmpty, let double = Double(newValue), double != 0 else {
                speed = nil
                return
            }

            speed = double
        }
    }

    var runAnimation: Animation {
        guard let speed = speed else {
            return animation
        }

        return animation.speed(speed)
    }

    func commitPresentedText() {
        isEditingPresentedTextKeyboard = false
        if presentedText.isEmpty {
            presentedText = "{{DEFAULT_TEXT}}"
        }
#if os(macOS)
        isJustEditingPresentedText = true
        isEditingPresentedText = false
        withAnimation(runAnimation) {
            isJustEditingPresentedText = false
        }
#else
        withAnimation(runAnimation) {
            isEditingPresentedText = false
        }
#endif
    }

    var body: some View {
        List {
            Section {
                if isShowing {
                    HStack {
                        if isEditingPresentedText {
                            TextField("", text: $presentedText, prompt: Text("Presented Text"))
                                .focused($isEditingPresentedTextKeyboard)
                                .onSubmit(commitPresentedText)
                        } else {
                            Text(presentedText)
                                .transition(isJustEditingPresentedText ? .identity : .opacity)
                        }
                        Spacer()
                        Button {
                            if isEditingPresentedText {
                                commitPresentedText()
                            } else {
                                withAnimation(runAnimation) {
                                    isEditingPresentedText = true
                                    isEditingPresentedTextKeyboard = true
                                }
                            }
                        } label: {
                            Image(systemName: isEditingPresentedText ? "checkmark" : "pencil")
                        }
                        .buttonStyle(.borderless)
                    }
                }

                if !isEditingPresentedText {
                    Button("Try Animation") {
                        isAdjustingSpeed = false
                        isEditingPresentedTextKeyboard = false
                        withAnimation(runAnimation) {
                            isShowing.toggle()
                        }
                    }
                    .buttonBorderShape(.roundedRectangle)

                    HStack {
                        Text("Animation Speed: ")
                        TextField("", text: speedBinding, prompt: Text("Default"))
#if os(iOS)
                            .keyboardType(.decimalPad)
#endif
                            .focused($isAdjustingSpeed)
                            .textFieldStyle(.roundedBorder)
                    }
                }
            }
        }
        .toolbar {
            ToolbarItem(placement: .keyboard) {
                HStack {
                    Spacer()
                    Button("Done") {
                        isAdjustingSpeed = false
                        commitPresentedText()
                    }
                }
            }
        }
        .navigationTitle("{{TITLE}}")
#if os(iOS)
        .navigationBarTitleDisplayMode(.large)
#endif
    }
}
"#;

/// Escape a value for use inside a Swift string literal
pub fn escape_swift_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Replace `{{KEY}}` placeholders in one pass; substituted values are never rescanned.
/// Unknown placeholders are left as they are.
fn substitute(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let replaced = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render the SwiftUI code equivalent to `preset`.
///
/// An unknown curve tag renders as `.default`, so the output always compiles.
pub fn render(preset: &AnimationPreset) -> String {
    let default_text = default_presented_text(&preset.title);
    let presented_text = if preset.presented_text.is_empty() {
        default_text.clone()
    } else {
        preset.presented_text.clone()
    };

    let speed = match preset.speed {
        Some(speed) => format!("{:?}", speed),
        None => "nil".to_string(),
    };

    substitute(
        TEMPLATE,
        &[
            (
                "ANIMATION",
                preset.curve().unwrap_or(CurveId::Default).swift_expression(),
            ),
            ("PRESENTED_TEXT", escape_swift_string(&presented_text)),
            ("DEFAULT_TEXT", escape_swift_string(&default_text)),
            ("SPEED", speed),
            ("TITLE", escape_swift_string(&preset.title)),
        ],
    )
}
