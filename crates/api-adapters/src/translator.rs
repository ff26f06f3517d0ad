//! Maps internal validation codes to messages a client can read.
//!
//! Unknown errors come back untouched; the caller decides how to show them.

use domains::{DomainError, PayloadContext};

pub fn translate(error: DomainError) -> DomainError {
    match localized_message(&error) {
        Some(message) => DomainError::Invariant(message.to_string()),
        None => error,
    }
}

fn localized_message(error: &DomainError) -> Option<&'static str> {
    use DomainError::{InvalidDataType, InvalidRefreshTokenType, MissingProperty, MissingRefreshToken};
    use PayloadContext::*;

    let message = match error {
        MissingProperty(RegisterUser) => "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
        InvalidDataType(RegisterUser) => "tidak dapat membuat user baru karena tipe data tidak sesuai",
        DomainError::UsernameLimitChar => {
            "tidak dapat membuat user baru karena karakter username melebihi batas limit"
        }
        DomainError::UsernameRestrictedCharacter => {
            "tidak dapat membuat user baru karena username mengandung karakter terlarang"
        }

        MissingProperty(UserLogin) => "harus mengirimkan username dan password",
        InvalidDataType(UserLogin) => "username dan password harus string",

        MissingRefreshToken(RefreshAuthentication | DeleteAuthentication) => "harus mengirimkan token refresh",
        InvalidRefreshTokenType(RefreshAuthentication | DeleteAuthentication) => "refresh token harus string",

        MissingProperty(NewThread) => "data properti thread tidak lengkap",
        InvalidDataType(NewThread) => "tipe data thread tidak valid",

        MissingProperty(AddedThread) => "data properti pada thread yang ditambahkan tidak lengkap",
        InvalidDataType(AddedThread) => "tipe data pada thread yang ditambahkan tidak valid",

        MissingProperty(DetailThread) => "data properti detail thread tidak lengkap",
        InvalidDataType(DetailThread) => "tipe data detail thread tidak valid",

        MissingProperty(NewComment) => "data properti thread comment tidak lengkap",
        InvalidDataType(NewComment) => "tipe data thread comment tidak valid",

        MissingProperty(AddedComment) => "data properti pada thread comment yang ditambahkan tidak lengkap",
        InvalidDataType(AddedComment) => "tipe data pada thread comment yang ditambahkan tidak valid",

        MissingProperty(DetailComment) => "data properti detail thread comment tidak lengkap",
        InvalidDataType(DetailComment) => "tipe data detail thread commment tidak valid",

        MissingProperty(DeleteComment) => "data properti delete thread comment tidak lengkap",
        InvalidDataType(DeleteComment) => "tipe data delete thread commment tidak valid",

        _ => return None,
    };
    Some(message)
}
