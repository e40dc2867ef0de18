//! Range literals, built at runtime by the `range` helper.

use crate::context::CompileContext;
use crate::fragments::Fragments;
use crate::helpers::Helper;
use crate::host::CompileHost;
use rbjs_ast::{Node, RangeKind};
use rbjs_common::Result;

/// `$range(start, finish, flag)`: `false` for the exclusive kind, `true` for
/// the inclusive kind.
pub(crate) fn compile_range(
    kind: RangeKind,
    start: &Node,
    finish: &Node,
    host: &mut dyn CompileHost,
) -> Result<Fragments> {
    host.request_helper(Helper::RANGE);

    let mut out = Fragments::new();
    out.push(host.options().helper_alias(Helper::RANGE.name()));
    out.push("(");
    out.append(host.recurse(start, CompileContext::expression())?);
    out.push(", ");
    out.append(host.recurse(finish, CompileContext::expression())?);
    out.push(match kind {
        RangeKind::Exclusive => ", false)",
        RangeKind::Inclusive => ", true)",
    });
    Ok(out)
}
