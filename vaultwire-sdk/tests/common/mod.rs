#![allow(dead_code)]

//! In-memory stand-in for the native core.
//!
//! Decodes commands the way the core does, keeps projects and secrets per
//! organization, gates resource commands on a successful login and records
//! every call that crosses the boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vaultwire_sdk::schema::wire::{decode_command, encode_envelope};
use vaultwire_sdk::schema::{
    Command, FingerprintResponse, GeneratedSecret, GeneratorsCommand, LoginResponse,
    PasswordGeneratorRequest, ProfileOrganizationResponse, ProfileResponse, ProjectDeleteResponse,
    ProjectResponse, ProjectsCommand, ProjectsDeleteResponse, ProjectsResponse, ResponseEnvelope,
    SecretDeleteResponse, SecretGeneratorRequest, SecretIdentifierResponse,
    SecretIdentifiersResponse, SecretResponse, SecretsCommand, SecretsDeleteResponse,
    SecretsResponse, SecretsSyncResponse, SyncResponse, TwoFactorProviders, UserApiKeyResponse,
};
use vaultwire_sdk::schema::{EmailProvider, TwoFactorProvider};
use vaultwire_sdk::{Client, ClientSettings, Engine, RawHandle, TransportError, TransportResult};

pub const VALID_TOKEN: &str = "valid-token";
pub const ORG_ID: &str = "org-1";
pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "correct horse battery staple";
pub const TWO_FACTOR_CODE: &str = "123456";
pub const CLIENT_ID: &str = "user.1f0c";
pub const CLIENT_SECRET: &str = "s3cr3t";

#[derive(Default)]
struct Session {
    authenticated: bool,
}

#[derive(Default)]
struct CoreState {
    next_handle: usize,
    next_id: usize,
    sessions: HashMap<usize, Session>,
    projects: Vec<ProjectResponse>,
    secrets: Vec<SecretResponse>,
}

#[derive(Default)]
struct Calls {
    inits: Vec<String>,
    commands: Vec<String>,
    frees: Vec<RawHandle>,
}

/// Fake core. Behaves like the real one unless a canned response is set, in
/// which case every command gets that raw text back.
#[derive(Default)]
pub struct FakeEngine {
    state: Mutex<CoreState>,
    calls: Mutex<Calls>,
    canned: Mutex<Option<String>>,
    fail_next: Mutex<Option<TransportError>>,
    fail_init: bool,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A core whose init entry point returns a null handle.
    pub fn failing_init() -> Arc<Self> {
        Arc::new(Self {
            fail_init: true,
            ..Default::default()
        })
    }

    pub fn with_canned_response(raw: &str) -> Arc<Self> {
        let engine = Self::default();
        *engine.canned.lock().unwrap() = Some(raw.to_string());
        Arc::new(engine)
    }

    pub fn set_canned_response(&self, raw: Option<&str>) {
        *self.canned.lock().unwrap() = raw.map(str::to_string);
    }

    /// The next command is recorded, then fails at the boundary with `err`.
    pub fn fail_next_dispatch(&self, err: TransportError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn init_settings(&self) -> Vec<String> {
        self.calls.lock().unwrap().inits.clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().unwrap().commands.clone()
    }

    pub fn command_count(&self) -> usize {
        self.calls.lock().unwrap().commands.len()
    }

    pub fn frees(&self) -> Vec<RawHandle> {
        self.calls.lock().unwrap().frees.clone()
    }

    pub fn live_sessions(&self) -> usize {
        self.state.lock().unwrap().sessions.len()
    }

    fn handle_command(&self, handle: RawHandle, command: Command) -> Result<String, String> {
        let mut state = self.state.lock().unwrap();
        let state = &mut *state;

        if !command.is_login() && !matches!(command, Command::Generators(_) | Command::Fingerprint(_))
        {
            let authenticated = state
                .sessions
                .get(&handle.get())
                .is_some_and(|s| s.authenticated);
            if !authenticated {
                return Err("Not authenticated".into());
            }
        }

        match command {
            Command::AccessTokenLogin(req) => {
                if req.access_token != VALID_TOKEN {
                    return Err("Access token is not in a valid format: Doesn't contain a decryption key".into());
                }
                if let Some(path) = &req.state_file {
                    std::fs::write(path, format!("{{\"token\":\"{}\"}}", req.access_token))
                        .map_err(|e| e.to_string())?;
                }
                authenticate(state, handle);
                ok(logged_in())
            }
            Command::PasswordLogin(req) => {
                if req.email != EMAIL || req.password != PASSWORD {
                    return Err("Username or password is incorrect. Try again.".into());
                }
                match req.two_factor {
                    None => ok(LoginResponse {
                        authenticated: false,
                        reset_master_password: false,
                        force_password_reset: false,
                        two_factor: Some(TwoFactorProviders {
                            email: Some(EmailProvider {
                                email: "u***@example.com".into(),
                            }),
                            ..Default::default()
                        }),
                        captcha: None,
                    }),
                    Some(tf) if tf.provider == TwoFactorProvider::Email && tf.token == TWO_FACTOR_CODE => {
                        authenticate(state, handle);
                        ok(logged_in())
                    }
                    Some(_) => Err("Two-step token is invalid. Try again.".into()),
                }
            }
            Command::ApiKeyLogin(req) => {
                if req.client_id != CLIENT_ID || req.client_secret != CLIENT_SECRET {
                    return Err("invalid_client".into());
                }
                authenticate(state, handle);
                ok(logged_in())
            }
            Command::Fingerprint(req) => {
                if req.public_key.is_empty() {
                    return Err("Invalid public key".into());
                }
                ok(FingerprintResponse {
                    fingerprint: "turban-dusty-prism-oyster-lurch".into(),
                })
            }
            Command::Sync(_) => ok(SyncResponse {
                profile: ProfileResponse {
                    id: "user-1".into(),
                    name: "Test User".into(),
                    email: EMAIL.into(),
                    organizations: vec![ProfileOrganizationResponse { id: ORG_ID.into() }],
                },
                ciphers: Vec::new(),
            }),
            Command::GetUserApiKey(req) => {
                let verified = req.master_password.as_deref() == Some(PASSWORD)
                    || req.otp.as_deref() == Some(TWO_FACTOR_CODE);
                if !verified {
                    return Err("Invalid master password".into());
                }
                ok(UserApiKeyResponse {
                    api_key: "user.apikey.0001".into(),
                })
            }
            Command::Generators(GeneratorsCommand::GeneratePassword(req)) => {
                generate_password(&req)
            }
            Command::Generators(GeneratorsCommand::GenerateSecret(req)) => generate_secret(&req),
            Command::Projects(cmd) => projects(state, cmd),
            Command::Secrets(cmd) => secrets(state, cmd),
        }
    }
}

impl Engine for FakeEngine {
    fn init(&self, settings: &str) -> TransportResult<RawHandle> {
        self.calls.lock().unwrap().inits.push(settings.to_string());
        if self.fail_init {
            return RawHandle::new(0);
        }
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let raw = state.next_handle * 0x10;
        state.sessions.insert(raw, Session::default());
        RawHandle::new(raw)
    }

    fn run_command(&self, handle: RawHandle, command: &str) -> TransportResult<String> {
        self.calls.lock().unwrap().commands.push(command.to_string());

        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        if let Some(raw) = self.canned.lock().unwrap().clone() {
            return Ok(raw);
        }
        if !self.state.lock().unwrap().sessions.contains_key(&handle.get()) {
            return Err(TransportError::NullHandle);
        }

        let response = match decode_command(command.as_bytes()) {
            Ok(command) => self.handle_command(handle, command),
            Err(e) => Err(e.to_string()),
        };
        let envelope = match response {
            Ok(data) => data,
            Err(message) => envelope(ResponseEnvelope::<()>::error(message)),
        };
        Ok(envelope)
    }

    fn free(&self, handle: RawHandle) {
        self.calls.lock().unwrap().frees.push(handle);
        self.state.lock().unwrap().sessions.remove(&handle.get());
    }
}

// ── Client helpers ───────────────────────────────────────────────

pub fn client(engine: &Arc<FakeEngine>) -> Client {
    Client::new(engine.clone(), ClientSettings::default()).unwrap()
}

pub fn logged_in_client(engine: &Arc<FakeEngine>) -> Client {
    let client = client(engine);
    client.auth().login_access_token(VALID_TOKEN, None).unwrap();
    client
}

pub fn success_body(data: serde_json::Value) -> String {
    serde_json::json!({"success": true, "data": data}).to_string()
}

pub fn failure_body(message: &str) -> String {
    serde_json::json!({"success": false, "errorMessage": message}).to_string()
}

// ── Core behaviour ───────────────────────────────────────────────

fn envelope<T: Serialize>(envelope: ResponseEnvelope<T>) -> String {
    encode_envelope(&envelope).unwrap()
}

fn ok<T: Serialize>(data: T) -> Result<String, String> {
    Ok(envelope(ResponseEnvelope::ok(data)))
}

fn authenticate(state: &mut CoreState, handle: RawHandle) {
    state.sessions.entry(handle.get()).or_default().authenticated = true;
}

fn logged_in() -> LoginResponse {
    LoginResponse {
        authenticated: true,
        reset_master_password: false,
        force_password_reset: false,
        two_factor: None,
        captcha: None,
    }
}

fn next_id(state: &mut CoreState, prefix: &str) -> String {
    state.next_id += 1;
    format!("{prefix}-{:04}", state.next_id)
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn projects(state: &mut CoreState, cmd: ProjectsCommand) -> Result<String, String> {
    match cmd {
        ProjectsCommand::Get(req) => state
            .projects
            .iter()
            .find(|p| p.id == req.id)
            .cloned()
            .map_or_else(|| Err("Project not found".into()), ok),
        ProjectsCommand::Create(req) => {
            if req.name.is_empty() {
                return Err("Project name must not be empty".into());
            }
            let created = now();
            let project = ProjectResponse {
                id: next_id(state, "project"),
                organization_id: req.organization_id,
                name: req.name,
                creation_date: created,
                revision_date: created,
            };
            state.projects.push(project.clone());
            ok(project)
        }
        ProjectsCommand::List(req) => {
            let data = state
                .projects
                .iter()
                .filter(|p| p.organization_id == req.organization_id)
                .cloned()
                .collect();
            ok(ProjectsResponse { data })
        }
        ProjectsCommand::Update(req) => {
            let project = state
                .projects
                .iter_mut()
                .find(|p| p.id == req.id && p.organization_id == req.organization_id)
                .ok_or("Project not found")?;
            project.name = req.name;
            project.revision_date = now();
            ok(project.clone())
        }
        ProjectsCommand::Delete(req) => {
            let data = req
                .ids
                .into_iter()
                .map(|id| {
                    let before = state.projects.len();
                    state.projects.retain(|p| p.id != id);
                    let error = (state.projects.len() == before).then(|| "Project not found".into());
                    ProjectDeleteResponse { id, error }
                })
                .collect();
            ok(ProjectsDeleteResponse { data })
        }
    }
}

fn secrets(state: &mut CoreState, cmd: SecretsCommand) -> Result<String, String> {
    match cmd {
        SecretsCommand::Get(req) => state
            .secrets
            .iter()
            .find(|s| s.id == req.id)
            .cloned()
            .map_or_else(|| Err("Secret not found".into()), ok),
        SecretsCommand::GetByIds(req) => {
            let mut data = Vec::with_capacity(req.ids.len());
            for id in &req.ids {
                let secret = state
                    .secrets
                    .iter()
                    .find(|s| &s.id == id)
                    .ok_or("Secret not found")?;
                data.push(secret.clone());
            }
            ok(SecretsResponse { data })
        }
        SecretsCommand::Create(req) => {
            let created = now();
            let secret = SecretResponse {
                id: next_id(state, "secret"),
                organization_id: req.organization_id,
                project_id: req.project_ids.and_then(|ids| ids.into_iter().next()),
                key: req.key,
                value: req.value,
                note: req.note,
                creation_date: created,
                revision_date: created,
            };
            state.secrets.push(secret.clone());
            ok(secret)
        }
        SecretsCommand::List(req) => {
            let data = state
                .secrets
                .iter()
                .filter(|s| s.organization_id == req.organization_id)
                .map(|s| SecretIdentifierResponse {
                    id: s.id.clone(),
                    organization_id: s.organization_id.clone(),
                    key: s.key.clone(),
                })
                .collect();
            ok(SecretIdentifiersResponse { data })
        }
        SecretsCommand::Update(req) => {
            let secret = state
                .secrets
                .iter_mut()
                .find(|s| s.id == req.id && s.organization_id == req.organization_id)
                .ok_or("Secret not found")?;
            secret.key = req.key;
            secret.value = req.value;
            secret.note = req.note;
            if let Some(ids) = req.project_ids {
                secret.project_id = ids.into_iter().next();
            }
            secret.revision_date = now();
            ok(secret.clone())
        }
        SecretsCommand::Delete(req) => {
            let data = req
                .ids
                .into_iter()
                .map(|id| {
                    let before = state.secrets.len();
                    state.secrets.retain(|s| s.id != id);
                    let error = (state.secrets.len() == before).then(|| "Secret not found".into());
                    SecretDeleteResponse { id, error }
                })
                .collect();
            ok(SecretsDeleteResponse { data })
        }
        SecretsCommand::Sync(req) => {
            let changed: Vec<SecretResponse> = state
                .secrets
                .iter()
                .filter(|s| s.organization_id == req.organization_id)
                .filter(|s| req.last_synced_date.is_none_or(|since| s.revision_date > since))
                .cloned()
                .collect();
            if changed.is_empty() && req.last_synced_date.is_some() {
                ok(SecretsSyncResponse {
                    has_changes: false,
                    secrets: None,
                })
            } else {
                let all = state
                    .secrets
                    .iter()
                    .filter(|s| s.organization_id == req.organization_id)
                    .cloned()
                    .collect();
                ok(SecretsSyncResponse {
                    has_changes: true,
                    secrets: Some(all),
                })
            }
        }
    }
}

// ── Generators ───────────────────────────────────────────────────

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*";
const AMBIGUOUS: &str = "IOl01";

/// An enabled class needs at least one character unless its minimum is
/// explicitly zero.
fn generate(
    classes: [(bool, Option<u8>, &str); 4],
    length: u8,
    avoid_ambiguous: bool,
) -> Result<String, String> {
    let enabled: Vec<(usize, Vec<char>)> = classes
        .iter()
        .filter(|(on, _, _)| *on)
        .map(|(_, min, chars)| {
            let set = chars
                .chars()
                .filter(|c| !avoid_ambiguous || !AMBIGUOUS.contains(*c))
                .collect();
            (min.map_or(1, usize::from), set)
        })
        .collect();

    if enabled.is_empty() {
        return Err("At least one character set must be enabled".into());
    }
    let minimum: usize = enabled.iter().map(|(min, _)| min).sum();
    if minimum > usize::from(length) {
        return Err("Password length can't be less than the sum of the minimums".into());
    }

    let mut out = String::with_capacity(usize::from(length));
    for (min, set) in &enabled {
        out.extend(set.iter().cycle().take(*min));
    }
    let mut i = 0;
    while out.len() < usize::from(length) {
        let (_, set) = &enabled[i % enabled.len()];
        out.push(set[(i * 7) % set.len()]);
        i += 1;
    }
    Ok(out)
}

fn generate_password(req: &PasswordGeneratorRequest) -> Result<String, String> {
    let password = generate(
        [
            (req.lowercase, req.min_lowercase, LOWERCASE),
            (req.uppercase, req.min_uppercase, UPPERCASE),
            (req.numbers, req.min_number, NUMBERS),
            (req.special, req.min_special, SPECIAL),
        ],
        req.length,
        req.avoid_ambiguous,
    )?;
    ok(password)
}

fn generate_secret(req: &SecretGeneratorRequest) -> Result<String, String> {
    let secret = generate(
        [
            (req.include_lowercase, req.min_lowercase, LOWERCASE),
            (req.include_uppercase, req.min_uppercase, UPPERCASE),
            (req.include_numbers, req.min_number, NUMBERS),
            (req.include_special, req.min_special, SPECIAL),
        ],
        req.length,
        req.avoid_ambiguous,
    )?;
    ok(GeneratedSecret { secret })
}
