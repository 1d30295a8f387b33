#![allow(dead_code)]

use anchor_lang::{
    prelude::{AccountInfo, Clock, Pubkey},
    solana_program::{entrypoint::ProgramResult, instruction::Instruction},
    AccountDeserialize, InstructionData, ToAccountMetas,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::{Account, AccountSharedData},
    instruction::InstructionError,
    signature::{Keypair, Signer},
    system_program,
    transaction::{Transaction, TransactionError},
};

use vrf_raffle::{
    constants::{RAFFLE_SEED, REQUEST_SEED, VAULT_SEED},
    state::{Raffle, RaffleConfig, RandomnessRequest},
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const ENTRANCE_FEE: u64 = LAMPORTS_PER_SOL / 10;
pub const INTERVAL: i64 = 30;
pub const PLAYER_FUNDS: u64 = 10 * LAMPORTS_PER_SOL;

/// Encodes a small integer as a big-endian 256-bit word.
pub fn word_from_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

// Anchor's entry wants the account slice to live as long as the accounts.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    vrf_raffle::entry(program_id, accounts, data)
}

/// Extracts the custom program error code from a failed transaction.
pub fn program_error(err: BanksClientError) -> u32 {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))
        | BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        } => code,
        other => panic!("expected a program error, got {other:?}"),
    }
}

pub fn request_address(raffle: &Pubkey, nonce: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[REQUEST_SEED, raffle.as_ref(), &nonce.to_le_bytes()],
        &vrf_raffle::ID,
    )
    .0
}

pub struct TestRaffle {
    pub context: ProgramTestContext,
    pub raffle: Pubkey,
    pub vault: Pubkey,
    pub oracle: Keypair,
    pub keeper: Keypair,
    pub players: Vec<Keypair>,
}

impl TestRaffle {
    /// Boots a bank with `player_count` funded wallets and a funded keeper.
    /// The raffle itself is not initialized yet.
    pub async fn start(player_count: usize) -> Self {
        let mut program_test = ProgramTest::new(
            "vrf_raffle",
            vrf_raffle::ID,
            processor!(process_instruction),
        );
        program_test.prefer_bpf(false);

        let players: Vec<Keypair> = (0..player_count).map(|_| Keypair::new()).collect();
        for player in &players {
            program_test.add_account(
                player.pubkey(),
                Account::new(PLAYER_FUNDS, 0, &system_program::ID),
            );
        }
        let keeper = Keypair::new();
        program_test.add_account(
            keeper.pubkey(),
            Account::new(LAMPORTS_PER_SOL, 0, &system_program::ID),
        );

        let context = program_test.start_with_context().await;
        let (raffle, _) = Pubkey::find_program_address(&[RAFFLE_SEED], &vrf_raffle::ID);
        let (vault, _) =
            Pubkey::find_program_address(&[VAULT_SEED, raffle.as_ref()], &vrf_raffle::ID);

        Self {
            context,
            raffle,
            vault,
            oracle: Keypair::new(),
            keeper,
            players,
        }
    }

    /// Boots a bank and initializes the raffle with a 0.1 SOL fee and a 30s
    /// interval.
    pub async fn with_raffle(player_count: usize) -> Self {
        let mut test = Self::start(player_count).await;
        let config = test.config(ENTRANCE_FEE);
        test.initialize(config).await.unwrap();
        test
    }

    pub fn config(&self, entrance_fee: u64) -> RaffleConfig {
        RaffleConfig {
            entrance_fee,
            interval: INTERVAL,
            oracle: self.oracle.pubkey(),
            gas_lane: [0x47; 32],
            subscription_id: 1,
            callback_compute_limit: 500_000,
        }
    }

    pub async fn send(
        &mut self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut all_signers = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.context.payer.pubkey()),
            &all_signers,
            blockhash,
        );
        self.context
            .banks_client
            .process_transaction(transaction)
            .await
    }

    /// Sends `instruction` and returns the program log, whatever the outcome.
    pub async fn send_for_logs(
        &mut self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> Vec<String> {
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut all_signers = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.context.payer.pubkey()),
            &all_signers,
            blockhash,
        );
        self.context
            .banks_client
            .process_transaction_with_metadata(transaction)
            .await
            .unwrap()
            .metadata
            .map(|metadata| metadata.log_messages)
            .unwrap_or_default()
    }

    pub async fn initialize(&mut self, config: RaffleConfig) -> Result<(), BanksClientError> {
        let instruction = Instruction {
            program_id: vrf_raffle::ID,
            accounts: vrf_raffle::accounts::InitializeRaffle {
                raffle: self.raffle,
                vault: self.vault,
                authority: self.context.payer.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: vrf_raffle::instruction::InitializeRaffle { config }.data(),
        };
        self.send(instruction, &[]).await
    }

    pub async fn enter(&mut self, player: usize, amount: u64) -> Result<(), BanksClientError> {
        let player = self.players[player].insecure_clone();
        let instruction = Instruction {
            program_id: vrf_raffle::ID,
            accounts: vrf_raffle::accounts::EnterRaffle {
                raffle: self.raffle,
                vault: self.vault,
                player: player.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: vrf_raffle::instruction::EnterRaffle { amount }.data(),
        };
        self.send(instruction, &[&player]).await
    }

    pub fn perform_upkeep_instruction(&self, nonce: u64) -> Instruction {
        Instruction {
            program_id: vrf_raffle::ID,
            accounts: vrf_raffle::accounts::PerformUpkeep {
                raffle: self.raffle,
                randomness_request: request_address(&self.raffle, nonce),
                keeper: self.keeper.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: vrf_raffle::instruction::PerformUpkeep.data(),
        }
    }

    /// Starts a draw; returns the request account the keeper opened.
    pub async fn perform_upkeep(&mut self) -> Result<Pubkey, BanksClientError> {
        let nonce = self.raffle_account().await.request_nonce;
        let instruction = self.perform_upkeep_instruction(nonce);
        let keeper = self.keeper.insecure_clone();
        self.send(instruction, &[&keeper]).await?;
        Ok(request_address(&self.raffle, nonce))
    }

    pub fn fulfill_instruction(
        &self,
        request: Pubkey,
        oracle: Pubkey,
        winner: Pubkey,
        request_id: [u8; 32],
        random_words: Vec<[u8; 32]>,
    ) -> Instruction {
        Instruction {
            program_id: vrf_raffle::ID,
            accounts: vrf_raffle::accounts::FulfillRandomWords {
                raffle: self.raffle,
                vault: self.vault,
                randomness_request: request,
                oracle,
                keeper: self.keeper.pubkey(),
                winner,
            }
            .to_account_metas(None),
            data: vrf_raffle::instruction::FulfillRandomWords {
                request_id,
                random_words,
            }
            .data(),
        }
    }

    /// Answers `request` as the configured oracle with a single word.
    pub async fn fulfill(
        &mut self,
        request: Pubkey,
        request_id: [u8; 32],
        word: u64,
        winner: Pubkey,
    ) -> Result<(), BanksClientError> {
        let oracle = self.oracle.insecure_clone();
        let instruction = self.fulfill_instruction(
            request,
            oracle.pubkey(),
            winner,
            request_id,
            vec![word_from_u64(word)],
        );
        self.send(instruction, &[&oracle]).await
    }

    pub async fn cancel_stale_draw(&mut self, request: Pubkey) -> Result<(), BanksClientError> {
        let instruction = Instruction {
            program_id: vrf_raffle::ID,
            accounts: vrf_raffle::accounts::CancelStaleDraw {
                raffle: self.raffle,
                randomness_request: request,
                keeper: self.keeper.pubkey(),
                authority: self.context.payer.pubkey(),
            }
            .to_account_metas(None),
            data: vrf_raffle::instruction::CancelStaleDraw.data(),
        };
        self.send(instruction, &[]).await
    }

    pub async fn now(&mut self) -> i64 {
        let clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp
    }

    pub async fn advance_clock(&mut self, seconds: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp += seconds;
        self.context.set_sysvar(&clock);
    }

    pub async fn balance(&mut self, address: Pubkey) -> u64 {
        self.context.banks_client.get_balance(address).await.unwrap()
    }

    pub async fn account_exists(&mut self, address: Pubkey) -> bool {
        self.context
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .is_some()
    }

    pub async fn raffle_account(&mut self) -> Raffle {
        let account = self
            .context
            .banks_client
            .get_account(self.raffle)
            .await
            .unwrap()
            .unwrap();
        Raffle::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn request_account(&mut self, address: Pubkey) -> RandomnessRequest {
        let account = self
            .context
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap();
        RandomnessRequest::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    /// Overwrites the vault's lamports, leaving its data untouched.
    pub async fn set_vault_lamports(&mut self, lamports: u64) {
        let mut account = self
            .context
            .banks_client
            .get_account(self.vault)
            .await
            .unwrap()
            .unwrap();
        account.lamports = lamports;
        self.context
            .set_account(&self.vault, &AccountSharedData::from(account));
    }
}
