// Copyright (C) 2025 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stream reading task.
//!
//! This module provides the concrete loading task over an async byte source:
//! it reads the source to the end in fixed-size chunks, reporting progress
//! per chunk and observing the cancellation signal and an optional per-read
//! timeout between chunks.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::error::{LoadError, ParamError};
use super::notifier::ProgressNotifier;
use super::task::{LoadOptions, LoadTask, Loading};

/// Size of the read buffer handed to the source.
const CHUNK_SIZE: usize = 8 * 1024;

/// Loading task that reads an async byte source to the end.
///
/// Produces the accumulated bytes. Cancellation is observed before and
/// during every read; a per-read timeout can be configured on top.
pub struct ReadTask<R> {
    /// Byte source the task consumes.
    source: R,
    /// Read surface over the task's state.
    loading: Loading,
    /// Mutation capability over the task's state.
    notifier: ProgressNotifier,
    /// Longest wait on a single read before the task gives up.
    read_timeout: Option<Duration>,
}

impl<R> ReadTask<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Creates a reading task over the source with the given options.
    ///
    /// # Returns
    /// The ready task, or the validation error of the options.
    pub fn new(source: R, options: LoadOptions) -> Result<Self, ParamError> {
        let (loading, notifier) = Loading::new(options)?;
        Ok(Self {
            source,
            loading,
            notifier,
            read_timeout: None,
        })
    }

    /// Sets the longest wait on a single read before the task gives up.
    ///
    /// Without a limit the task waits on the source indefinitely, short of
    /// cancellation.
    pub fn read_timeout(&mut self, limit: Duration) -> &mut Self {
        self.read_timeout = Some(limit);
        self
    }
}

#[async_trait]
impl<R> LoadTask for ReadTask<R>
where
    R: AsyncRead + Unpin + Send,
{
    type Output = Vec<u8>;

    fn loading(&self) -> &Loading {
        &self.loading
    }

    async fn run(&mut self) -> Result<Vec<u8>, LoadError> {
        let ReadTask {
            source,
            loading,
            notifier,
            read_timeout,
        } = self;
        let signal = loading.signal().cloned();
        notifier.start();

        let mut buf = [0u8; CHUNK_SIZE];
        let mut data = Vec::with_capacity(loading.total() as usize);
        loop {
            if let Some(token) = &signal {
                if token.is_cancelled() {
                    notifier.abort();
                    return Err(LoadError::aborted());
                }
            }
            let read = read_chunk(source, &mut buf, *read_timeout);
            let read = match &signal {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            notifier.abort();
                            return Err(LoadError::aborted());
                        }
                        read = read => read,
                    }
                }
                None => read.await,
            };
            match read {
                Ok(0) => break,
                Ok(count) => {
                    data.extend_from_slice(&buf[..count]);
                    notifier.advance(count as u64);
                }
                Err(err) if err.kind() == io::ErrorKind::TimedOut => {
                    notifier.timeout();
                    return Err(LoadError::from(err));
                }
                Err(err) => {
                    notifier.fail();
                    return Err(LoadError::from(err));
                }
            }
        }
        notifier.complete();
        Ok(data)
    }
}

/// Reads once from the source, giving up after `limit` if one is set.
async fn read_chunk<R>(source: &mut R, buf: &mut [u8], limit: Option<Duration>) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match limit {
        Some(limit) => match tokio::time::timeout(limit, source.read(buf)).await {
            Ok(read) => read,
            Err(_) => Err(io::ErrorKind::TimedOut.into()),
        },
        None => source.read(buf).await,
    }
}
