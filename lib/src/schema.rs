//! Diesel schema for the `entregas` table.
//!
//! The table is owned and migrated externally; this definition only mirrors
//! the columns the service reads and updates.

diesel::table! {
    entregas (id) {
        id -> Int4,
        data_emissao -> Date,
        codigo_pdv -> Nullable<Int4>,
        pdv -> Nullable<Int4>,
        #[max_length = 1]
        entregue -> Varchar,
        #[max_length = 255]
        nome_entregador -> Nullable<Varchar>,
    }
}
