//! Go templates for the pointer helper documents.
//!
//! Values available to the templates:
//! - document: `generator`, `package`, `imports`, `types`
//! - each import: `locator`, `alias_prefix` (`"alias "` or empty), `reference`
//! - each type: `type`, `name` (display name), `symbol`

use crate::template::{TemplateError, TemplateSet};

const HEADER: &str = r#"// Code generated by {{generator}}. DO NOT EDIT.

package {{package}}
{{#if imports}}

import (
{{#each imports}}
	{{alias_prefix}}"{{locator}}"
{{/each}}
)
{{/if}}
"#;

const SCALAR_TO_POINTER: &str = r#"{{> header}}
{{#each types}}

{{> to pointer func}}

{{> to pointer slice func}}

{{> to pointer map func}}
{{/each}}
"#;

const SCALAR_FROM_POINTER: &str = r#"{{> header}}
{{#each types}}

{{> from pointer func}}

{{> from pointer slice func}}

{{> from pointer map func}}
{{/each}}
"#;

const TO_POINTER_FUNC: &str = r#"// {{name}} returns a pointer value for the {{symbol}} value passed in.
func {{name}}(v {{symbol}}) *{{symbol}} {
	return &v
}
"#;

const TO_POINTER_SLICE_FUNC: &str = r#"// {{name}}Slice returns a slice of {{symbol}} pointers from the values
// passed in. Each pointer refers to its own copy of the value.
func {{name}}Slice(vs []{{symbol}}) []*{{symbol}} {
	ps := make([]*{{symbol}}, len(vs))
	for i := range vs {
		v := vs[i]
		ps[i] = &v
	}

	return ps
}
"#;

const TO_POINTER_MAP_FUNC: &str = r#"// {{name}}Map returns a map of {{symbol}} pointers from the values
// passed in. Each pointer refers to its own copy of the value.
func {{name}}Map(vs map[string]{{symbol}}) map[string]*{{symbol}} {
	ps := make(map[string]*{{symbol}}, len(vs))
	for k := range vs {
		v := vs[k]
		ps[k] = &v
	}

	return ps
}
"#;

const FROM_POINTER_FUNC: &str = r#"// To{{name}} returns the {{symbol}} value p points to, or the {{symbol}}
// zero value if p is nil.
func To{{name}}(p *{{symbol}}) (v {{symbol}}) {
	if p == nil {
		return v
	}

	return *p
}
"#;

const FROM_POINTER_SLICE_FUNC: &str = r#"// To{{name}}Slice returns a slice of the {{symbol}} values the pointers
// passed in point to. Nil pointers become the {{symbol}} zero value.
func To{{name}}Slice(vs []*{{symbol}}) []{{symbol}} {
	ps := make([]{{symbol}}, len(vs))
	for i, v := range vs {
		ps[i] = To{{name}}(v)
	}

	return ps
}
"#;

const FROM_POINTER_MAP_FUNC: &str = r#"// To{{name}}Map returns a map of the {{symbol}} values the pointers
// passed in point to. Nil pointers become the {{symbol}} zero value.
func To{{name}}Map(vs map[string]*{{symbol}}) map[string]{{symbol}} {
	ps := make(map[string]{{symbol}}, len(vs))
	for k, v := range vs {
		ps[k] = To{{name}}(v)
	}

	return ps
}
"#;

/// Parse the Go template set.
pub(crate) fn templates() -> Result<TemplateSet, TemplateError> {
    let mut set = TemplateSet::new();
    set.define("header", HEADER)?
        .define("scalar to pointer", SCALAR_TO_POINTER)?
        .define("scalar from pointer", SCALAR_FROM_POINTER)?
        .define("to pointer func", TO_POINTER_FUNC)?
        .define("to pointer slice func", TO_POINTER_SLICE_FUNC)?
        .define("to pointer map func", TO_POINTER_MAP_FUNC)?
        .define("from pointer func", FROM_POINTER_FUNC)?
        .define("from pointer slice func", FROM_POINTER_SLICE_FUNC)?
        .define("from pointer map func", FROM_POINTER_MAP_FUNC)?;
    Ok(set)
}
