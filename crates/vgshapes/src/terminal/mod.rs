//! Terminal mode control.
//!
//! Programs that draw full screen usually wait for a keypress before tearing
//! the display down. These helpers save the controlling terminal's settings,
//! switch it to raw mode for single-key input and put it back afterwards.

use std::io;
use std::mem::MaybeUninit;
use std::os::fd::RawFd;

use libc::{
    read, tcgetattr, tcsetattr, termios, ECHO, ICANON, IEXTEN, ISIG, STDIN_FILENO, TCSANOW,
    VMIN, VTIME,
};

/// Terminal settings captured from a file descriptor.
#[derive(Clone, Copy)]
pub struct SavedTerminal {
    fd: RawFd,
    attrs: termios,
}

impl SavedTerminal {
    /// Saves the settings of stdin.
    pub fn save() -> io::Result<Self> {
        Self::from_fd(STDIN_FILENO)
    }

    /// Saves the settings of `fd`.
    ///
    /// Fails with `ENOTTY` when `fd` is not a terminal.
    pub fn from_fd(fd: RawFd) -> io::Result<Self> {
        let mut attrs = MaybeUninit::<termios>::uninit();
        let status = unsafe { tcgetattr(fd, attrs.as_mut_ptr()) };
        if status == -1 {
            return Err(io::Error::last_os_error());
        }

        // tcgetattr filled the struct
        let attrs = unsafe { attrs.assume_init() };
        Ok(Self { fd, attrs })
    }

    /// Puts the saved settings back.
    pub fn restore(&self) -> io::Result<()> {
        set_attributes(self.fd, &self.attrs)
    }

    /// Switches the terminal to raw single-byte input.
    pub fn set_raw(&self) -> io::Result<()> {
        set_attributes(self.fd, &raw_attributes(&self.attrs))
    }

    #[inline]
    pub fn fd(&self) -> RawFd {
        self.fd
    }
}

impl std::fmt::Debug for SavedTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavedTerminal").field("fd", &self.fd).finish_non_exhaustive()
    }
}

/// Raw mode for as long as the guard lives.
#[derive(Debug)]
pub struct RawTerminal {
    saved: SavedTerminal,
}

impl RawTerminal {
    /// Puts stdin into raw mode.
    pub fn enter() -> io::Result<Self> {
        Self::enter_fd(STDIN_FILENO)
    }

    pub fn enter_fd(fd: RawFd) -> io::Result<Self> {
        let saved = SavedTerminal::from_fd(fd)?;
        saved.set_raw()?;
        log::debug!("terminal {fd} in raw mode");
        Ok(Self { saved })
    }

    /// Blocks until one byte arrives on the terminal in raw mode.
    ///
    /// Returns `None` at end of input.
    pub fn read_key(&self) -> io::Result<Option<u8>> {
        read_byte(self.saved.fd)
    }

    pub fn saved(&self) -> &SavedTerminal {
        &self.saved
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(err) = self.saved.restore() {
            log::warn!("failed to restore terminal {}: {err}", self.saved.fd);
        }
    }
}

/// `attrs` with echo, canonical input, extended input processing and signal
/// keys turned off, reading one byte at a time with no timeout.
pub fn raw_attributes(attrs: &termios) -> termios {
    let mut raw = *attrs;
    raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);
    raw.c_cc[VMIN] = 1;
    raw.c_cc[VTIME] = 0;
    raw
}

/// Reads a single byte from `fd`, retrying on `EINTR`.
fn read_byte(fd: RawFd) -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        let n = unsafe { read(fd, (&mut byte as *mut u8).cast(), 1) };
        match n {
            -1 => {
                let err = io::Error::last_os_error();
                if err.kind() != io::ErrorKind::Interrupted {
                    return Err(err);
                }
            }
            0 => return Ok(None),
            _ => return Ok(Some(byte)),
        }
    }
}

fn set_attributes(fd: RawFd, attrs: &termios) -> io::Result<()> {
    let status = unsafe { tcsetattr(fd, TCSANOW, attrs) };
    if status == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
