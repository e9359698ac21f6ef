use std::fmt::Write as _;
use std::process;

/// Dynamic printf-style message rendering.
///
/// This module renders a format template plus an ordered sequence of typed
/// argument values into an owned string, with no truncation regardless of
/// the rendered size. It is the only allocating stage of the logging
/// pipeline, and the only one with a fatal failure mode.

/// Initial render buffer capacity in bytes.
///
/// Most diagnostic lines fit in the first pass; anything larger triggers
/// exactly one correctly sized retry.
pub const INITIAL_CAPACITY: usize = 1024;

/// A typed log argument.
///
/// Replaces untyped C-style varargs with a tagged union, one case per
/// primitive the formatter supports, so the formatter contract is
/// statically checkable. Values convert in via `From`:
///
/// ```
/// # use diagkit::FormatArg;
/// let args: &[FormatArg] = &["peer".into(), 42.into(), 3.5.into()];
/// assert_eq!(diagkit::render("%s #%d at %f", args), "peer #42 at 3.500000");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum FormatArg<'a> {
    /// A signed integer (`%d`, `%i`)
    Int(i64),

    /// An unsigned integer (`%u`)
    Uint(u64),

    /// A 64-bit float (`%f`)
    Float(f64),

    /// A string slice (`%s`)
    Str(&'a str),

    /// A pointer rendered as an address (`%p`, `%x`)
    Addr(usize),
}

macro_rules! arg_from {
    ($case:ident: $to:ty => $($from:ty),+) => {
        $(impl<'a> From<$from> for FormatArg<'a> {
            fn from(v: $from) -> Self {
                FormatArg::$case(v as $to)
            }
        })+
    };
}

arg_from!(Int: i64 => i8, i16, i32, i64, isize);
arg_from!(Uint: u64 => u8, u16, u32, u64, usize);
arg_from!(Float: f64 => f32, f64);

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(v: &'a str) -> Self {
        FormatArg::Str(v)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(v: &'a String) -> Self {
        FormatArg::Str(v.as_str())
    }
}

impl<'a> From<bool> for FormatArg<'a> {
    fn from(v: bool) -> Self {
        FormatArg::Int(v as i64)
    }
}

impl<'a, T> From<*const T> for FormatArg<'a> {
    fn from(v: *const T) -> Self {
        FormatArg::Addr(v as usize)
    }
}

impl<'a, T> From<*mut T> for FormatArg<'a> {
    fn from(v: *mut T) -> Self {
        FormatArg::Addr(v as usize)
    }
}

/// A render buffer with a fixed byte budget that keeps counting.
///
/// Pieces that fit entirely within the budget are appended; pieces that do
/// not are skipped but still counted, so after a pass `required` holds the
/// exact length of the fully rendered message. A skipped piece always
/// implies `required > cap`, which forces the correctly sized second pass.
struct BoundedBuf {
    out: String,
    cap: usize,
    required: usize,
}

impl BoundedBuf {
    fn with_capacity(cap: usize, template: &str) -> Self {
        let mut out = String::new();
        if out.try_reserve_exact(cap).is_err() {
            // Never report formatter failure back through the formatting
            // pipeline: best-effort stderr line, then fail fast.
            eprintln!(
                "diagkit: cannot allocate {} bytes for log message; fmt={}",
                cap, template
            );
            process::abort();
        }
        Self {
            out,
            cap,
            required: 0,
        }
    }

    fn push_str(&mut self, s: &str) {
        self.required += s.len();
        if self.out.len() + s.len() <= self.cap {
            self.out.push_str(s);
        }
    }
}

fn is_conversion(spec: u8) -> bool {
    matches!(spec, b'd' | b'i' | b'u' | b'f' | b's' | b'x' | b'p')
}

fn render_arg(buf: &mut BoundedBuf, spec: u8, arg: &FormatArg) {
    let mut tmp = String::new();
    // Writing to a String cannot fail.
    let _ = match (spec, arg) {
        (b'x', FormatArg::Int(v)) => write!(tmp, "{:x}", v),
        (b'x', FormatArg::Uint(v)) => write!(tmp, "{:x}", v),
        (b'x', FormatArg::Addr(v)) => write!(tmp, "{:x}", v),
        (b'p', FormatArg::Int(v)) => write!(tmp, "{:#x}", v),
        (b'p', FormatArg::Uint(v)) => write!(tmp, "{:#x}", v),
        (b'p', FormatArg::Addr(v)) => write!(tmp, "{:#x}", v),
        (b'f', FormatArg::Float(v)) => write!(tmp, "{:.6}", v),
        // Specifier/argument type mismatch is not guarded here; the
        // argument renders in its natural form.
        (_, FormatArg::Int(v)) => write!(tmp, "{}", v),
        (_, FormatArg::Uint(v)) => write!(tmp, "{}", v),
        (_, FormatArg::Float(v)) => write!(tmp, "{}", v),
        (_, FormatArg::Str(v)) => write!(tmp, "{}", v),
        (_, FormatArg::Addr(v)) => write!(tmp, "{:#x}", v),
    };
    buf.push_str(&tmp);
}

fn render_pass<'a>(template: &str, args: &[FormatArg<'a>], cap: usize) -> BoundedBuf {
    let mut buf = BoundedBuf::with_capacity(cap, template);
    let bytes = template.as_bytes();
    let mut next_arg = 0;
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        // Flush the literal run before the specifier. '%' is ASCII, so
        // both bounds are char boundaries.
        buf.push_str(&template[lit_start..i]);

        match bytes.get(i + 1) {
            Some(&b'%') => {
                buf.push_str("%");
                i += 2;
            }
            Some(&spec) if is_conversion(spec) => {
                if next_arg < args.len() {
                    render_arg(&mut buf, spec, &args[next_arg]);
                    next_arg += 1;
                } else {
                    // Specifier without an argument stays verbatim.
                    buf.push_str(&template[i..i + 2]);
                }
                i += 2;
            }
            _ => {
                // Unknown conversion or trailing '%': keep the '%' and
                // rescan what follows as literal text.
                buf.push_str("%");
                i += 1;
            }
        }
        lit_start = i;
    }

    buf.push_str(&template[lit_start..]);
    buf
}

/// Renders `template` with `args` into an owned string.
///
/// Conversions: `%d`/`%i` signed, `%u` unsigned, `%f` fixed six decimals,
/// `%s` string, `%x` lowercase hex, `%p` `0x`-prefixed address, `%%`
/// literal percent. Surplus arguments are ignored; a specifier with no
/// remaining argument is emitted verbatim. An empty template renders to an
/// empty string.
///
/// # Algorithm
///
/// Two-phase probe-then-grow: the first pass renders into an
/// [`INITIAL_CAPACITY`]-byte buffer while counting the exact required
/// length. If that capacity is insufficient, a single retry with a buffer
/// of exactly `required + 1` bytes is guaranteed to complete. This avoids
/// both worst-case pre-allocation and repeated blind doubling.
///
/// # Aborts
///
/// Allocation failure for the render buffer is non-recoverable: a
/// best-effort line goes to stderr and the process aborts. The formatter
/// never returns a partial or malformed buffer.
///
/// # Examples
///
/// ```
/// # use diagkit::render;
/// assert_eq!(render("connected to %s:%u", &["host".into(), 8080u16.into()]),
///            "connected to host:8080");
/// assert_eq!(render("", &[]), "");
/// ```
pub fn render<'a>(template: &str, args: &[FormatArg<'a>]) -> String {
    let pass = render_pass(template, args, INITIAL_CAPACITY);
    if pass.required <= INITIAL_CAPACITY {
        return pass.out;
    }

    let required = pass.required;
    let retry = render_pass(template, args, required + 1);
    debug_assert_eq!(retry.out.len(), required);
    retry.out
}
