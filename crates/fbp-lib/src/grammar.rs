//! FBP notation grammar.
//!
//! ```text
//! start          <- line* _ !.
//! line           <- _ "EXPORT=" [A-Za-z.0-9_]+ ":" [A-Z0-9_]+ _ LineTerminator?
//!                 / _ "INPORT=" <exported> _ LineTerminator? {ExportInport}
//!                 / _ "OUTPORT=" <exported> _ LineTerminator? {ExportOutport}
//!                 / comment ("\n" / "\r")?
//!                 / _ ("\n" / "\r")
//!                 / _ connection _ LineTerminator? {CloseChain}
//! LineTerminator <- _ ","? comment? ("\n" / "\r")?
//! comment        <- _ "#" anychar*
//! connection     <- bridge _ "->" _ connection / bridge
//! bridge         <- port _ {MarkInPort} node _ port {MarkOutPort} {EmitMiddlet}
//!                 / iip
//!                 / leftlet &(_ "->") {EmitLeftlet}
//!                 / rightlet {EmitRightlet}
//! leftlet        <- node _ portWithIndex / node _ port
//! rightlet       <- portWithIndex _ node / port _ node
//! iip            <- "'" <iipchar*> "'" {CaptureIip}
//! node           <- <[A-Za-z0-9_]+> {CaptureNodeName} component? {EmitNode}
//! component      <- "(" <[A-Za-z0-9_/-]*> {CaptureComponent} compMeta? ")"
//! compMeta       <- ":" <[A-Za-z0-9_/=,-]+> {CaptureMeta}
//! port           <- <[A-Z.0-9_]+> __ {CapturePort}
//! portWithIndex  <- <[A-Z.0-9_]+> {CapturePort} "[" <[0-9]+> "]" __
//! ```
//!
//! Keywords are ASCII case-insensitive. `<...>` commits a `Text` record and
//! `{...}` a zero-width action record.

use crate::engine::{Matcher, Rule, Tracer};

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_upper_ident(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

fn is_port_char(c: char) -> bool {
    is_upper_ident(c) || c == '.'
}

fn is_export_name(c: char) -> bool {
    is_ident(c) || c == '.'
}

fn is_component_char(c: char) -> bool {
    is_ident(c) || c == '/' || c == '-'
}

fn is_meta_char(c: char) -> bool {
    is_component_char(c) || c == '=' || c == ','
}

/// Whole document. Succeeds only if the entire input matched.
pub fn start<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Start, |m| m.star(line) && ws(m) && m.not(|m| m.any()))
}

fn line<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Line, |m| {
        m.attempt(legacy_export)
            || m.attempt(|m| exported_port(m, "inport=", Rule::ExportInport))
            || m.attempt(|m| exported_port(m, "outport=", Rule::ExportOutport))
            || m.attempt(|m| comment(m) && m.opt(newline))
            || m.attempt(|m| ws(m) && newline(m))
            || m.attempt(|m| {
                ws(m)
                    && connection(m)
                    && ws(m)
                    && m.opt(line_terminator)
                    && m.action(Rule::CloseChain)
            })
    })
}

// Accepted for compatibility, has no effect on the graph.
fn legacy_export<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    ws(m)
        && m.literal_ci("export=")
        && m.plus(|m| m.class(is_export_name))
        && m.char(':')
        && m.plus(|m| m.class(is_upper_ident))
        && ws(m)
        && m.opt(line_terminator)
}

fn exported_port<T: Tracer>(m: &mut Matcher<'_, '_, T>, keyword: &str, action: Rule) -> bool {
    ws(m)
        && m.literal_ci(keyword)
        && m.text(|m| {
            m.plus(|m| m.class(is_ident))
                && m.char('.')
                && m.plus(|m| m.class(is_upper_ident))
                && m.char(':')
                && m.plus(|m| m.class(is_upper_ident))
        })
        && ws(m)
        && m.opt(line_terminator)
        && m.action(action)
}

fn line_terminator<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::LineTerminator, |m| {
        ws(m) && m.opt(|m| m.char(',')) && m.opt(comment) && m.opt(newline)
    })
}

fn comment<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Comment, |m| ws(m) && m.char('#') && m.star(anychar))
}

fn anychar<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Anychar, |m| m.not(newline) && m.any())
}

fn newline<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.char('\n') || m.char('\r')
}

fn connection<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Connection, |m| {
        m.attempt(|m| bridge(m) && arrow(m) && ws(m) && connection(m))
            || bridge(m)
    })
}

fn bridge<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Bridge, |m| {
        m.attempt(|m| {
            port(m)
                && ws(m)
                && m.action(Rule::MarkInPort)
                && node(m)
                && ws(m)
                && port(m)
                && m.action(Rule::MarkOutPort)
                && m.action(Rule::EmitMiddlet)
        }) || iip(m)
            || m.attempt(|m| {
                leftlet(m) && m.followed_by(arrow) && m.action(Rule::EmitLeftlet)
            })
            || m.attempt(|m| rightlet(m) && m.action(Rule::EmitRightlet))
    })
}

// A chain's last segment is a rightlet even when blanks or a comment follow it.
fn arrow<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    ws(m) && m.literal("->")
}

fn leftlet<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Leftlet, |m| {
        m.attempt(|m| node(m) && ws(m) && port_with_index(m))
            || m.attempt(|m| node(m) && ws(m) && port(m))
    })
}

fn rightlet<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Rightlet, |m| {
        m.attempt(|m| port_with_index(m) && ws(m) && node(m))
            || m.attempt(|m| port(m) && ws(m) && node(m))
    })
}

fn iip<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Iip, |m| {
        m.char('\'')
            && m.text(|m| m.star(iipchar))
            && m.char('\'')
            && m.action(Rule::CaptureIip)
    })
}

fn iipchar<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Iipchar, |m| {
        m.literal("\\'") || (m.not(|m| m.char('\'')) && m.any())
    })
}

fn node<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Node, |m| {
        m.text(|m| m.plus(|m| m.class(is_ident)))
            && m.action(Rule::CaptureNodeName)
            && m.opt(component)
            && m.action(Rule::EmitNode)
    })
}

fn component<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Component, |m| {
        m.char('(')
            && m.text(|m| m.star(|m| m.class(is_component_char)))
            && m.action(Rule::CaptureComponent)
            && m.opt(comp_meta)
            && m.char(')')
    })
}

fn comp_meta<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::CompMeta, |m| {
        m.char(':')
            && m.text(|m| m.plus(|m| m.class(is_meta_char)))
            && m.action(Rule::CaptureMeta)
    })
}

fn port<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Port, |m| {
        m.text(|m| m.plus(|m| m.class(is_port_char))) && ws1(m) && m.action(Rule::CapturePort)
    })
}

// The index is matched but not captured into the endpoint.
fn port_with_index<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::PortWithIndex, |m| {
        m.text(|m| m.plus(|m| m.class(is_port_char)))
            && m.action(Rule::CapturePort)
            && m.char('[')
            && m.text(|m| m.plus(|m| m.class(|c| c.is_ascii_digit())))
            && m.char(']')
            && ws1(m)
    })
}

fn ws<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Ws, |m| m.star(|m| m.class(is_blank)))
}

fn ws1<T: Tracer>(m: &mut Matcher<'_, '_, T>) -> bool {
    m.rule(Rule::Ws1, |m| m.plus(|m| m.class(is_blank)))
}
