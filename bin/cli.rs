//! CLI tool for deploying and interacting with the Reward Pool contract.

use reward_pool::pool::RewardPool;
use odra::casper_types::U512;
use odra::host::{HostEnv, HostRef, NoArgs};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Gas limit for the pool deployment
const DEPLOY_GAS: u64 = 400_000_000_000;

/// Gas limit for a deposit or a withdrawal
const CALL_GAS: u64 = 5_000_000_000;

/// Gas for a reward split, which touches every participant
const DISTRIBUTE_GAS: u64 = 50_000_000_000;

/// Deploys the Reward Pool contract.
pub struct RewardPoolDeployScript;

impl DeployScript for RewardPoolDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let _pool = RewardPool::load_or_deploy(
            &env,
            NoArgs,
            container,
            DEPLOY_GAS
        )?;

        Ok(())
    }
}

fn amount_arg() -> CommandArg {
    CommandArg::new(
        "amount",
        "Amount in motes, attached to the call",
        NamedCLType::U512,
    )
}

/// Scenario to deposit principal into the pool.
pub struct DepositScenario;

impl Scenario for DepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![amount_arg()]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let pool = container.contract_ref::<RewardPool>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(CALL_GAS);
        pool.with_tokens(amount).try_deposit(amount)?;

        println!("Deposited {} motes", amount);
        Ok(())
    }
}

impl ScenarioMetadata for DepositScenario {
    const NAME: &'static str = "deposit";
    const DESCRIPTION: &'static str = "Deposits principal into the reward pool";
}

/// Scenario to split rewards across current depositors.
pub struct DepositRewardsScenario;

impl Scenario for DepositRewardsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![amount_arg()]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let pool = container.contract_ref::<RewardPool>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(DISTRIBUTE_GAS);
        pool.with_tokens(amount).try_deposit_rewards(amount)?;

        println!(
            "Distributed {} motes across {} participants ({} undistributed in total)",
            amount,
            pool.get_participant_count(),
            pool.get_undistributed_rewards()
        );
        Ok(())
    }
}

impl ScenarioMetadata for DepositRewardsScenario {
    const NAME: &'static str = "deposit-rewards";
    const DESCRIPTION: &'static str = "Splits a reward across current depositors by principal share";
}

/// Scenario to withdraw principal plus accrued rewards.
pub struct WithdrawScenario;

impl Scenario for WithdrawScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut pool = container.contract_ref::<RewardPool>(env)?;

        env.set_gas(CALL_GAS);
        let payout = pool.try_withdraw()?;

        println!("Withdrew {} motes", payout);
        Ok(())
    }
}

impl ScenarioMetadata for WithdrawScenario {
    const NAME: &'static str = "withdraw";
    const DESCRIPTION: &'static str = "Withdraws the caller's principal and accrued rewards";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the Reward Pool contract")
        .deploy(RewardPoolDeployScript)
        .contract::<RewardPool>()
        .scenario(DepositScenario)
        .scenario(DepositRewardsScenario)
        .scenario(WithdrawScenario)
        .build()
        .run();
}
