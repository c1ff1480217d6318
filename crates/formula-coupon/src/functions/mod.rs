use std::collections::HashMap;
use std::sync::OnceLock;

use crate::coercion::ValueLocaleConfig;
use crate::date::ExcelDateSystem;
use crate::value::{ErrorKind, Value};

pub(crate) mod args;
pub mod financial;

/// Evaluation context a builtin reads its workbook settings from.
pub trait FunctionContext {
    fn date_system(&self) -> ExcelDateSystem;
    fn value_locale(&self) -> ValueLocaleConfig;
}

/// Builtins receive already-evaluated arguments whose count is within `min_args..=max_args`.
pub type FunctionImpl = fn(&dyn FunctionContext, &[Value]) -> Value;

#[derive(Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub implementation: FunctionImpl,
}

inventory::collect!(FunctionSpec);

/// Iterate all [`FunctionSpec`] registrations collected via [`inventory`].
pub fn iter_function_specs() -> impl Iterator<Item = &'static FunctionSpec> {
    inventory::iter::<FunctionSpec>.into_iter()
}

fn registry() -> &'static HashMap<String, &'static FunctionSpec> {
    static REGISTRY: OnceLock<HashMap<String, &'static FunctionSpec>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        iter_function_specs()
            .map(|spec| (spec.name.to_ascii_uppercase(), spec))
            .collect()
    })
}

/// Case-insensitive lookup of a registered builtin.
pub fn lookup_function(name: &str) -> Option<&'static FunctionSpec> {
    registry().get(&name.to_ascii_uppercase()).copied()
}

/// Invoke a builtin by name.
///
/// Unknown names evaluate to `#NAME?`; an argument count outside `min_args..=max_args`
/// evaluates to `#N/A` without calling the implementation.
pub fn call_function(ctx: &dyn FunctionContext, name: &str, args: &[Value]) -> Value {
    let Some(spec) = lookup_function(name) else {
        return Value::Error(ErrorKind::Name);
    };
    if args.len() < spec.min_args || args.len() > spec.max_args {
        log::trace!(
            "{}: expected {}..={} args, got {}",
            spec.name,
            spec.min_args,
            spec.max_args,
            args.len()
        );
        return Value::Error(ErrorKind::NA);
    }
    (spec.implementation)(ctx, args)
}
