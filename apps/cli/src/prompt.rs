//! Interactive choice of a menu entry.

use langgen_core::{Menu, Selection};
use std::io::{self, BufRead, Write};

/// Print the menu and read numbers until a valid one is entered.
///
/// Returns `None` on end of input or when the menu is empty.
pub fn choose<'m, R, W>(menu: &'m Menu, input: &mut R, output: &mut W) -> io::Result<Option<Selection<'m>>>
where
    R: BufRead,
    W: Write,
{
    if menu.is_empty() {
        return Ok(None);
    }
    writeln!(output, "{}", menu.render())?;

    loop {
        write!(
            output,
            "Enter the number of the phrase you want (1-{}): ",
            menu.len()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match menu.select_input(&line) {
            Ok(selection) => {
                writeln!(
                    output,
                    "You selected: {} -> {}",
                    selection.choice.phrase, selection.choice.gloss
                )?;
                return Ok(Some(selection));
            }
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}

/// Ask for an image URL until one is given.
///
/// Returns `None` when the user enters "none" or input ends.
pub fn ask_image_url<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "Enter an image URL for your card (\"none\" for no image): "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let url = line.trim();
        if url.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        if url.is_empty() {
            writeln!(output, "No URL provided. Please enter a valid image URL.")?;
            continue;
        }
        return Ok(Some(url.to_string()));
    }
}
