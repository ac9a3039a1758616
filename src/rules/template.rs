//! Fixed prose blocks of the generated rules document

use crate::docs::{render_docs, resolve_docs};
use crate::stack::{FrameworkId, ProjectContext, TechFingerprint};

const SECTION_SEPARATOR: &str = "\n\n";

const PREAMBLE: &str = "\
# AI Assistant Rules

## Behavioral Contract
- Act as a senior frontend engineer working inside this existing project.
- Follow the detected stack below; never introduce a framework, library or build tool the project does not already use.
- Prefer small, reviewable changes. Touch only the files the task requires.
- When a request is ambiguous, state the assumption you are making before writing code.
- Never invent APIs. If you are unsure whether an API exists in the pinned version, say so.";

const QUALITY_FLOOR: &str = "\
## Quality Floor
- Code must run without modification: no placeholders, no elided sections, no `// ...` gaps.
- Handle loading, empty and error states for every asynchronous operation.
- Remove unused imports, variables and dead branches before finishing.
- Keep components focused; extract logic once a component grows beyond a single responsibility.
- Never hard-code secrets, tokens or environment-specific URLs.";

const TYPESCRIPT_RULES: &str = "\
## TypeScript
- All new code is TypeScript with `strict` semantics.
- Do not use `any`; reach for `unknown` plus narrowing, generics or precise unions.
- Type every exported function signature, component prop and API response.
- Prefer `interface` for object shapes that may be extended and `type` for unions.
- Never silence the compiler with `@ts-ignore`; use `@ts-expect-error` with a reason if unavoidable.";

const JAVASCRIPT_RULES: &str = "\
## JavaScript
- Write modern ES modules: `const`/`let`, arrow functions, optional chaining.
- Document the shape of non-trivial objects and function parameters with JSDoc.
- Validate external data (API responses, route params) before use.
- Do not convert files to TypeScript unless explicitly asked.";

const VUE3_RULES: &str = "\
## Vue 3
- Use the Composition API with `<script setup>`.
- Declare props with `defineProps` and events with `defineEmits`; never mutate props.
- Use `ref` for primitives and `reactive` only for grouped state; do not destructure reactive objects without `toRefs`.
- Extract reusable stateful logic into composables named `useXxx`.
- Do not use the Options API, filters, or `$listeners` (all removed or discouraged in Vue 3).";

const VUE2_RULES: &str = "\
## Vue 2
- Use the Options API consistently with the existing components.
- Do not use Vue 3 only APIs: `<script setup>`, `defineProps`, `Teleport`, multiple root nodes.
- Add reactive properties up front in `data()`; use `this.$set` for properties added later.
- Keep mixins to a minimum; prefer plain utility modules for shared logic.";

const REACT_RULES: &str = "\
## React
- Write function components with hooks only; no class components.
- Follow the rules of hooks; list every dependency in effect and memo dependency arrays.
- Keep state as local as possible; lift it only when siblings need it.
- Derive values during render instead of syncing them through `useEffect`.
- Give list items stable keys; never use the array index for reorderable lists.";

const UNI_APP_RULES: &str = "\
## uni-app
- Use uni-app built-in components (`view`, `text`, `image`, `scroll-view`) instead of HTML tags.
- Call platform APIs through the `uni.*` namespace; never touch `window` or `document` directly.
- Size with `rpx` units for cross-device layout.
- Guard platform-specific code with conditional compilation comments (`#ifdef` / `#endif`).
- Register every page in `pages.json`; navigate with `uni.navigateTo` and friends.";

const UNI_APP_VUE3_NOTE: &str =
    "- This project runs uni-app on Vue 3: use `<script setup>` and the Composition API.";

const UNI_APP_VUE2_NOTE: &str =
    "- This project runs uni-app on Vue 2: use the Options API and avoid Vue 3 only syntax.";

const UNKNOWN_FRAMEWORK_RULES: &str = "\
## Framework
- No supported framework was detected. Match the conventions of the existing code exactly.
- Ask before adding any framework or runtime dependency.";

const STYLE_PREFERENCES: &str = "\
## Style Preferences
- Naming: PascalCase components, camelCase functions and variables, UPPER_SNAKE_CASE constants.
- One component per file; the file name matches the component name.
- Keep functions short and return early instead of nesting conditionals.
- Comments explain intent, not mechanics.
- Follow the project's formatter and linter configuration; do not reformat unrelated code.";

const EXTERNAL_REFERENCE: &str = "\
## Controlled External Reference
- Consult only the official documentation linked above or the project's own source.
- Treat blog posts, forum answers and generated snippets as unverified; check them against the pinned versions.
- If documentation and the installed version disagree, the installed version wins.";

fn language_rules(context: &ProjectContext) -> &'static str {
    if context.is_typescript() {
        TYPESCRIPT_RULES
    } else {
        JAVASCRIPT_RULES
    }
}

fn framework_rules(context: &ProjectContext) -> String {
    match context.framework {
        FrameworkId::Vue if context.major >= 3 => VUE3_RULES.to_string(),
        FrameworkId::Vue => VUE2_RULES.to_string(),
        FrameworkId::React => REACT_RULES.to_string(),
        FrameworkId::UniApp => {
            let note = if context.major >= 3 {
                UNI_APP_VUE3_NOTE
            } else {
                UNI_APP_VUE2_NOTE
            };
            format!("{}\n{}", UNI_APP_RULES, note)
        }
        FrameworkId::Unknown => UNKNOWN_FRAMEWORK_RULES.to_string(),
    }
}

fn documentation_block(fingerprint: &TechFingerprint) -> String {
    let lines = render_docs(&resolve_docs(&fingerprint.to_string()));
    if lines.is_empty() {
        "## Documentation\n- No version-pinned documentation is registered for this stack.".to_string()
    } else {
        format!("## Documentation\n{}", lines.join("\n"))
    }
}

/// Builds the complete rules document for a detected project.
pub fn assemble_rules(context: &ProjectContext, fingerprint: &TechFingerprint) -> String {
    let sections = [
        PREAMBLE.to_string(),
        QUALITY_FLOOR.to_string(),
        language_rules(context).to_string(),
        framework_rules(context),
        STYLE_PREFERENCES.to_string(),
        format!("## Tech Stack\nTech stack: {}", fingerprint),
        documentation_block(fingerprint),
        EXTERNAL_REFERENCE.to_string(),
    ];

    let mut document = sections.join(SECTION_SEPARATOR);
    document.push('\n');
    document
}
