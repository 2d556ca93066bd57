use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate a conformance test for every tuple size the crate is configured to support.
    // This makes it much less likely that an off-by-one in the generator macros goes un-caught.
    println!("cargo:rerun-if-changed=build.rs");

    let max_arity = if env::var_os("CARGO_FEATURE_LARGE_TUPLES").is_some() {
        64
    } else {
        16
    };

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("conformance.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(
        f,
        "use static_assertions::{{assert_impl_all, assert_type_eq_all}};"
    )?;
    writeln!(f)?;

    // Write out the test
    writeln!(f, "#[test]")?;
    writeln!(f, "fn every_supported_arity_conforms() {{")?;
    writeln!(f, "    assert_eq!(crate::MAX_ARITY, {});", max_arity)?;
    for shape in Shape::up_to(max_arity) {
        shape.write_assertions(&mut f)?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// Element types cycled through to build heterogeneous tuples.
const ELEMENTS: [&str; 6] = ["u8", "i16", "u32", "char", "bool", "&'static str"];

/// How a tuple is handed over: by value, by shared reference, or by unique reference.
#[derive(Clone, Copy, Debug)]
pub enum Form {
    Val,
    Ref,
    Mut,
}

impl Form {
    const ALL: [Form; 3] = [Form::Val, Form::Ref, Form::Mut];

    fn prefix(self) -> &'static str {
        match self {
            Form::Val => "",
            Form::Ref => "&'static ",
            Form::Mut => "&'static mut ",
        }
    }
}

/// A tuple of a particular size, with its element types fixed.
#[derive(Clone, Debug)]
pub struct Shape {
    elements: Vec<&'static str>,
}

impl Shape {
    pub fn up_to(max_arity: usize) -> impl Iterator<Item = Shape> {
        (0..=max_arity).map(|n| Shape {
            elements: ELEMENTS.iter().copied().cycle().take(n).collect(),
        })
    }

    fn arity(&self) -> usize {
        self.elements.len()
    }

    fn tuple(&self, form: Form) -> Tupled<'_> {
        Tupled { shape: self, form }
    }

    fn function(&self, form: Form) -> Function<'_> {
        Function { shape: self, form }
    }

    fn write_assertions(&self, f: &mut impl Write) -> std::io::Result<()> {
        for form in Form::ALL.iter().copied() {
            let tuple = self.tuple(form);
            let function = self.function(form);
            writeln!(
                f,
                "    assert_impl_all!({}: Apply<{}>, ApplyMut<{}>, ApplyOnce<{}>);",
                function, tuple, tuple, tuple
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(<{} as ApplyOnce<{}>>::Output, u64);",
                function, tuple
            )?;
            if self.arity() == 1 {
                writeln!(
                    f,
                    "    assert_type_eq_all!(<{} as Unwrap>::Output, {}{});",
                    tuple,
                    form.prefix(),
                    self.elements[0]
                )?;
            } else {
                writeln!(
                    f,
                    "    assert_type_eq_all!(<{} as Unwrap>::Output, {});",
                    tuple, tuple
                )?;
            }
        }
        Ok(())
    }
}

/// A tuple type, e.g. `&'static (u8, i16,)`.
pub struct Tupled<'a> {
    shape: &'a Shape,
    form: Form,
}

impl Display for Tupled<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}(", self.form.prefix())?;
        for element in &self.shape.elements {
            write!(f, "{},", element)?;
        }
        write!(f, ")")
    }
}

/// A function pointer type accepting the spread elements of a tuple, e.g. `fn(&'static u8) -> u64`.
pub struct Function<'a> {
    shape: &'a Shape,
    form: Form,
}

impl Display for Function<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let count = self.shape.arity();
        write!(f, "fn(")?;
        for (i, element) in self.shape.elements.iter().enumerate() {
            write!(f, "{}{}", self.form.prefix(), element)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        write!(f, ") -> u64")
    }
}
