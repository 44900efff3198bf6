//! Password and secret generation.

use crate::client::Client;
use crate::error::SdkResult;
use vaultwire_schema::{
    Command, GeneratedSecret, GeneratorsCommand, PasswordGeneratorRequest, SecretGeneratorRequest,
};

pub struct Generators<'a> {
    client: &'a Client,
}

impl<'a> Generators<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn password(&self, request: PasswordGeneratorRequest) -> SdkResult<String> {
        self.client
            .run(Command::Generators(GeneratorsCommand::GeneratePassword(request)))
    }

    pub fn secret(&self, request: SecretGeneratorRequest) -> SdkResult<String> {
        let generated: GeneratedSecret = self
            .client
            .run(Command::Generators(GeneratorsCommand::GenerateSecret(request)))?;
        Ok(generated.secret)
    }
}
