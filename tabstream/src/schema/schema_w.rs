use crate::schema::Schema;
use std::io::Write;
use tabstream_types::serde::{TypeTagInt, VarInt, WriteLen};
use tabstream_types::CodecError;

impl Schema {
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen, CodecError> {
        let mut w_len = 0;

        /* column_count */
        w_len += *VarInt::from_len(self.len()).ser(w)?;

        for col in self.columns() {
            /* name */
            let name = col.name.as_bytes();
            w_len += *VarInt::from_len(name.len()).ser(w)?;
            w.write_all(name)?;
            w_len += name.len();

            /* type_tag */
            let tag_int = TypeTagInt::from(col.tag);
            w.write_all(&tag_int.to_le_bytes())?;
            w_len += 1;
        }

        Ok(WriteLen::new_manual(w_len))
    }
}
