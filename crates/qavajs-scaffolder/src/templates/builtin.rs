//! Built-in project templates
//!
//! Placeholders use `{{name}}` syntax and are filled by [`RenderContext`].
//! Lines that render empty are dropped by [`collapse_blank_lines`].
//!
//! [`RenderContext`]: super::render::RenderContext
//! [`collapse_blank_lines`]: super::render::collapse_blank_lines

pub const GITIGNORE: &str = "node_modules/";

pub const PACKAGE_JSON: &str = r#"{
  "name": "qavajs_project",
  "version": "1.0.0",
  "description": "qavajs project",
  "scripts": {
    "test": "qavajs run"
  },
  "dependencies": {}
}
"#;

pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es2016",
    "module": "node16",
    "moduleResolution": "node16",
    "outDir": "./lib",
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true,
    "strict": true,
    "skipLibCheck": true
  }
}
"#;

pub const CONFIG_COMMONJS: &str = r#"const Memory = require("./memory");
{{page_object_import}}
module.exports = {
  default: {
    paths: ["features/**/*.feature"],
    require: {{steps}},
    format: {{format}},
    memory: new Memory(),
{{page_object_fields}}
  }
}
"#;

pub const CONFIG_MODULE: &str = r#"import Memory from "{{memory_import}}";
{{page_object_import}}
export default {
  paths: ["features/**/*.feature"],
  {{loader_key}}: {{steps}},
  format: {{format}},
  memory: new Memory(),
{{page_object_fields}}
}
"#;

pub const PAGE_OBJECT_COMMONJS: &str = r#"const { locator } = require("{{locator_module}}");
module.exports = class App {
  Body = locator("body");
  GetStartedButton = locator("a.button[href='/docs/intro']");
}
"#;

pub const PAGE_OBJECT_MODULE: &str = r#"import { locator } from "{{locator_module}}";
export default class App {
  Body = locator("body");
  GetStartedButton = locator("a.button[href='/docs/intro']");
}
"#;

pub const MEMORY_COMMONJS: &str = "module.exports = class Constants {\n}\n";

pub const MEMORY_MODULE: &str = "export default class Constants {\n}\n";

pub const FEATURE: &str = r#"Feature: qavajs framework
  Scenario: Open qavajs docs
    Given I open 'https://qavajs.github.io/' url
    Then I expect text of 'Body' to contain 'qavajs'
"#;

pub const FEATURE_API: &str = r#"Feature: qavajs framework
  Scenario: Request qavajs site
    When I create 'GET' request 'request'
    And I add 'https://qavajs.github.io/' url to '$request'
    And I send '$request' request and save response as 'response'
    And I parse '$response' body as text
    Then I expect '$response.payload' contains '@qavajs'
"#;

pub const README: &str = r#"# qavajs
## Docs
{{docs_url}}
## Install Modules
```bash
{{package_manager}} install
```
## Execute Tests
```bash
npx qavajs run --config {{config_file}}
```
## Project Structure
- [config](./{{config_file}}) - main config
- [features](./features) - test cases
- [memory](./memory) - test data
- [page_object](./page_object) - page objects
- [step_definitions](./step_definitions) - project specific step definitions
- [report](./report) - reports
"#;
