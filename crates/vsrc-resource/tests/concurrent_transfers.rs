//! # Concurrent Transfers
//!
//! Many steps stream at once in a real pipeline. Sources and backends are
//! shared across tokio tasks; transfers on different sources must not see
//! each other's bytes, and a stalled transfer must not hold up the rest.

use std::sync::Arc;
use std::time::Duration;

use vsrc_core::{StagingConfig, Version, VersionResult};
use vsrc_resource::{
    ArtifactName, ArtifactRepository, GetVersionedSource, PutVersionedSource, SandboxDestination,
    VersionedSource,
};
use vsrc_worker::{archive_from_bytes, read_archive, InMemorySandbox, InMemoryVolume};

fn payload_for(i: usize) -> Vec<u8> {
    format!("archive-{i:04}").repeat(100).into_bytes()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn independent_sources_stream_in_parallel() -> anyhow::Result<()> {
    let mut handles = Vec::new();
    for i in 0..32 {
        handles.push(tokio::spawn(async move {
            let volume = Arc::new(InMemoryVolume::new());
            let source: Arc<dyn VersionedSource> = Arc::new(GetVersionedSource::with_staging(
                &StagingConfig::new(""),
                volume.clone(),
                Version::new().with("n", i.to_string()),
                Vec::new(),
            ));
            source.stream_in("tree", archive_from_bytes(payload_for(i))).await?;
            let out = read_archive(source.stream_out("get/tree").await?).await?;
            anyhow::ensure!(out == payload_for(i), "source {i} saw foreign bytes");
            Ok::<_, anyhow::Error>(())
        }));
    }
    for handle in handles {
        handle.await??;
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_sandbox_serves_many_readers() -> anyhow::Result<()> {
    let sandbox = Arc::new(InMemorySandbox::new());
    sandbox.seed("/scratch/out", payload_for(7));
    let source: Arc<dyn VersionedSource> = Arc::new(PutVersionedSource::new(
        VersionResult::new(Version::new().with("build", "7"), Vec::new()),
        sandbox.clone(),
        "/scratch",
    ));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let source = Arc::clone(&source);
        handles.push(tokio::spawn(async move {
            let out = read_archive(source.stream_out("out/").await?).await?;
            Ok::<_, anyhow::Error>(out)
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, payload_for(7));
    }
    assert_eq!(sandbox.streamed_out_paths().len(), 16);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stalled_transfer_does_not_block_others() -> anyhow::Result<()> {
    let sandbox = Arc::new(InMemorySandbox::new());
    let source: Arc<dyn VersionedSource> = Arc::new(PutVersionedSource::new(
        VersionResult::default(),
        sandbox.clone(),
        "/scratch",
    ));

    // An archive whose writer never finishes.
    let (reader, writer) = tokio::io::duplex(16);
    let stalled = {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.stream_in("stalled", Box::new(reader)).await })
    };

    source.stream_in("quick", archive_from_bytes(b"done".to_vec())).await?;
    assert_eq!(sandbox.archive("/scratch/quick"), Some(b"done".to_vec()));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!stalled.is_finished(), "stalled transfer should still be pending");

    // Cancelling the stalled transfer releases it without storing anything.
    stalled.abort();
    let joined = stalled.await;
    assert!(joined.expect_err("aborted").is_cancelled());
    drop(writer);
    assert!(sandbox.archive("/scratch/stalled").is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn repository_wires_inputs_concurrently() -> anyhow::Result<()> {
    let repo = Arc::new(ArtifactRepository::new());
    let mut volumes = Vec::new();
    for i in 0..8 {
        let volume = Arc::new(InMemoryVolume::new());
        volume.seed(".", payload_for(i));
        repo.register_source(
            ArtifactName::new(format!("input-{i}")),
            Arc::new(GetVersionedSource::new(volume.clone(), Version::new(), Vec::new())),
        );
        volumes.push(volume);
    }

    let task = Arc::new(InMemorySandbox::new());
    let mut handles = Vec::new();
    for name in repo.names() {
        let repo = Arc::clone(&repo);
        let task = task.clone();
        handles.push(tokio::spawn(async move {
            let destination = SandboxDestination::new(task, format!("/tmp/build/task/{name}"));
            repo.stream_to(&name, &destination).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    for i in 0..8 {
        assert_eq!(
            task.archive(&format!("/tmp/build/task/input-{i}")),
            Some(payload_for(i))
        );
    }
    assert!(volumes.iter().all(|v| v.streamed_out_paths() == vec!["."]));
    Ok(())
}
