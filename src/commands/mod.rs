pub mod batch_cmds;
