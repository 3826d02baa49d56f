use serde::{de::DeserializeOwned, Serialize};

use crate::{Error, Rom2402, RomAdapter};

impl<A, E> Rom2402<A>
where
    A: RomAdapter<Error = E>,
{
    /// Encodes `obj` with postcard and writes it at `addr`. Returns the
    /// number of bytes written.
    pub fn store_object<T: Serialize, const N: usize>(
        &mut self,
        dev: u8,
        addr: u8,
        obj: &T,
    ) -> Result<usize, Error<E>> {
        let bytes: heapless::Vec<u8, N> =
            postcard::to_vec(obj).map_err(|_| Error::SerializationError)?;
        if bytes.len() > u8::MAX as usize {
            return Err(Error::BufferTooSmall);
        }
        self.writestr(dev, addr, &bytes, bytes.len() as u8)?;
        Ok(bytes.len())
    }

    /// Reads up to `N` bytes at `addr` and decodes them. Bytes past the
    /// encoded value are ignored.
    pub fn load_object<T: DeserializeOwned, const N: usize>(
        &mut self,
        dev: u8,
        addr: u8,
    ) -> Result<T, Error<E>> {
        self.check_range(addr, 1)?;
        let available = self.config().capacity() - addr as usize;
        let len = N.min(available).min(u8::MAX as usize);

        let mut scratch = [0; N];
        self.readstr(dev, addr, &mut scratch, len as u8)?;
        postcard::from_bytes(&scratch[..len]).map_err(|_| Error::SerializationError)
    }
}
